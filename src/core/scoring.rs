use chrono::{Datelike, Utc};

use crate::core::keywords;
use crate::models::{MatchingFactor, Scheme, ScoringWeights, UserProfile};

/// Floor applied to every computed score.
pub const MIN_SCORE: u32 = 60;
/// Ceiling applied to every computed score, boosts included.
pub const MAX_SCORE: u32 = 95;

/// Factor count at which a match counts as strong.
const STRONG_MATCH_FACTORS: usize = 4;
/// Extra points a strong match receives after clamping.
const STRONG_MATCH_BONUS: u32 = 5;
/// Factors reported for an ordinary match.
const MAX_FACTORS: usize = 5;
/// Factors reported for a strong match.
const MAX_FACTORS_STRONG: usize = 6;

/// Per-hit increments for the keyword counting rules.
const EMPLOYMENT_KEYWORD_STEP: u32 = 8;
const INTEREST_STEP: u32 = 10;
const SECTOR_KEYWORD_STEP: u32 = 3;

/// Outcome of a single rule: points gained plus the factor shown to the
/// user, when the rule reports one.
struct RuleHit {
    delta: u32,
    factor: Option<MatchingFactor>,
}

impl RuleHit {
    /// Hit whose whole delta is attributed to one reported factor.
    fn scored(factor: &str, description: String, delta: u32) -> Self {
        RuleHit {
            delta,
            factor: Some(MatchingFactor {
                factor: factor.to_string(),
                description,
                weight: delta,
            }),
        }
    }

    /// Hit that moves the score without surfacing a factor.
    fn silent(delta: u32) -> Self {
        RuleHit { delta, factor: None }
    }
}

type Rule = fn(&UserProfile, &Scheme, &ScoringWeights) -> Option<RuleHit>;

/// Rules fire independently, but their order fixes which factors survive
/// truncation on heavily matched schemes.
const RULES: [Rule; 14] = [
    income_rule,
    age_rule,
    gender_rule,
    category_rule,
    state_rule,
    occupation_rule,
    employment_status_rule,
    interest_rule,
    bpl_rule,
    farming_land_rule,
    disability_rule,
    sector_rule,
    popularity_rule,
    recency_rule,
];

/// Score one scheme against a profile.
///
/// Every rule is evaluated in order and folded into an accumulator seeded
/// with the base score, then the total is clamped to 60-95. A match with
/// four or more factors gets a +5 bonus (still capped at 95) and keeps six
/// factors instead of five. Factors are truncated in rule order first and
/// sorted by descending weight afterwards.
pub fn score_scheme(
    profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> (u32, Vec<MatchingFactor>) {
    let mut score = weights.base;
    let mut factors: Vec<MatchingFactor> = Vec::new();

    for rule in RULES {
        if let Some(hit) = rule(profile, scheme, weights) {
            score += hit.delta;
            if let Some(factor) = hit.factor {
                factors.push(factor);
            }
        }
    }

    let mut score = score.clamp(MIN_SCORE, MAX_SCORE);
    let keep = if factors.len() >= STRONG_MATCH_FACTORS {
        score = (score + STRONG_MATCH_BONUS).min(MAX_SCORE);
        MAX_FACTORS_STRONG
    } else {
        MAX_FACTORS
    };
    factors.truncate(keep);
    factors.sort_by(|a, b| b.weight.cmp(&a.weight));

    (score, factors)
}

/// Treats an empty string the same as a missing value.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Lowercased title plus description, the text most keyword rules scan.
fn scheme_text(scheme: &Scheme) -> String {
    format!("{} {}", scheme.title, scheme.description).to_lowercase()
}

/// Indian-style digit grouping, e.g. 1250000 -> "12,50,000".
fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        parts.push(&head[end - 2..end]);
        end -= 2;
    }
    parts.push(&head[..end]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}

fn income_rule(
    profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    let income = profile.effective_income()?;
    let eligibility = &scheme.eligibility;

    if let Some(max) = eligibility.income.as_ref().and_then(|limit| limit.max) {
        if income <= max {
            return Some(RuleHit::scored(
                "Income Eligibility",
                format!(
                    "Your annual income ₹{} qualifies for this scheme",
                    format_inr(income)
                ),
                weights.exact_match,
            ));
        }
    }
    // The flat convention is consulted even when the nested bound rejected
    // the profile.
    if let Some(max) = eligibility.max_income {
        if income <= max {
            return Some(RuleHit::scored(
                "Income Range",
                "Income requirement satisfied".to_string(),
                weights.high_relevance,
            ));
        }
    }
    None
}

fn age_rule(profile: &UserProfile, scheme: &Scheme, weights: &ScoringWeights) -> Option<RuleHit> {
    let age = profile.age?;
    let eligibility = &scheme.eligibility;

    if let Some(range) = &eligibility.age_range {
        let min = range.min.unwrap_or(0);
        let max = range.max.unwrap_or(100);
        if age >= min && age <= max {
            return Some(RuleHit::scored(
                "Perfect Age Match",
                format!("Your age {age} falls within the eligible range ({min}-{max} years)"),
                weights.exact_match,
            ));
        }
        return None;
    }

    // Without a range, the two bounds are checked independently. Only the
    // lower bound reports a factor.
    let mut delta = 0;
    let mut factor = None;
    if let Some(min_age) = eligibility.min_age {
        if age >= min_age {
            delta += weights.moderate_relevance;
            factor = Some(MatchingFactor {
                factor: "Age Eligibility".to_string(),
                description: format!("Meets minimum age requirement of {min_age} years"),
                weight: weights.moderate_relevance,
            });
        }
    }
    if let Some(max_age) = eligibility.max_age {
        if age <= max_age {
            delta += weights.moderate_relevance;
        }
    }
    if delta > 0 {
        Some(RuleHit { delta, factor })
    } else {
        None
    }
}

fn gender_rule(
    profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    let gender = profile.gender?;
    let allowed = present(&scheme.eligibility.gender)?;

    // Containment, not equality: an eligibility of "female" also admits
    // "male".
    if allowed == "all" || allowed.contains(gender.as_str()) {
        return Some(RuleHit::scored(
            "Gender Eligibility",
            format!("Available for {} applicants", gender.as_str()),
            weights.high_relevance,
        ));
    }
    None
}

fn category_rule(
    profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    let category = present(&profile.category)?;
    let allowed = scheme.eligibility.category.as_ref()?;

    if allowed.iter().any(|entry| entry == category || entry == "General") {
        return Some(RuleHit::scored(
            "Category Match",
            format!("Eligible for {category} category"),
            weights.high_relevance,
        ));
    }
    None
}

fn state_rule(profile: &UserProfile, scheme: &Scheme, weights: &ScoringWeights) -> Option<RuleHit> {
    let state = present(&profile.state)?;
    let scheme_state = scheme.state.as_deref().unwrap_or("");

    if !scheme_state.is_empty() && scheme_state.to_lowercase() == state.to_lowercase() {
        return Some(RuleHit::scored(
            "State Specific Scheme",
            format!("Exclusive {state} state scheme"),
            weights.exact_match,
        ));
    }
    if scheme_state.is_empty() || scheme_state.to_lowercase() == "all states" {
        return Some(RuleHit::scored(
            "Pan India Scheme",
            "Available across all Indian states".to_string(),
            weights.moderate_relevance,
        ));
    }
    None
}

fn occupation_rule(
    profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    let occupation = present(&profile.occupation)?;
    let lowered = occupation.to_lowercase();

    if keywords::occupation_categories(&lowered).contains(&scheme.category.as_str()) {
        return Some(RuleHit::scored(
            "Perfect Occupation Match",
            format!("Highly relevant for {occupation}"),
            weights.exact_match,
        ));
    }

    // Fall back to scanning the scheme text for the longer words of the
    // occupation.
    let text = scheme_text(scheme);
    if lowered.split(' ').any(|word| word.len() > 3 && text.contains(word)) {
        return Some(RuleHit::scored(
            "Occupation Relevance",
            "Related to your occupation field".to_string(),
            weights.moderate_relevance,
        ));
    }
    None
}

fn employment_status_rule(
    profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    let status = profile.employment_status?;
    let text = scheme_text(scheme);

    let hits = keywords::employment_keywords(status)
        .iter()
        .filter(|&&keyword| text.contains(keyword))
        .count() as u32;
    if hits == 0 {
        return None;
    }
    let delta = (hits * EMPLOYMENT_KEYWORD_STEP).min(weights.high_relevance);
    Some(RuleHit::scored(
        "Employment Status Match",
        format!("Designed for {} individuals", status.as_str()),
        delta,
    ))
}

fn interest_rule(
    profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    if profile.interests.is_empty() {
        return None;
    }
    let text = format!(
        "{} {} {}",
        scheme.title, scheme.description, scheme.category
    )
    .to_lowercase();

    let hits = profile
        .interests
        .iter()
        .filter(|interest| text.contains(&interest.to_lowercase()))
        .count() as u32;
    if hits == 0 {
        return None;
    }
    let delta = (hits * INTEREST_STEP).min(weights.high_relevance);
    Some(RuleHit::scored(
        "Interest Alignment",
        format!("Matches {hits} of your interests"),
        delta,
    ))
}

fn bpl_rule(profile: &UserProfile, scheme: &Scheme, weights: &ScoringWeights) -> Option<RuleHit> {
    if !profile.bpl_card_holder {
        return None;
    }
    let text = scheme_text(scheme);
    if text.contains("bpl") || text.contains("below poverty") || text.contains("poor") {
        return Some(RuleHit::scored(
            "BPL Priority",
            "Special provisions for BPL families".to_string(),
            weights.high_relevance,
        ));
    }
    None
}

fn farming_land_rule(
    profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    let acres = profile.farming_land.filter(|&acres| acres > 0.0)?;
    if scheme.category != "Agriculture" && scheme.category != "Agriculture & Farming" {
        return None;
    }
    let delta = if acres > 5.0 {
        weights.exact_match
    } else {
        weights.high_relevance
    };
    Some(RuleHit::scored(
        "Farming Land Ownership",
        format!("Beneficial for farmers with {acres} acres"),
        delta,
    ))
}

fn disability_rule(
    profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    if !profile.disability {
        return None;
    }
    let text = scheme_text(scheme);
    if text.contains("disability") || text.contains("divyang") || text.contains("handicap") {
        return Some(RuleHit::scored(
            "Disability Support",
            "Special provisions for persons with disabilities".to_string(),
            weights.high_relevance,
        ));
    }
    None
}

fn sector_rule(
    _profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    let sector = keywords::sector_keywords(&scheme.category);
    if sector.is_empty() {
        return None;
    }
    let text = format!(
        "{} {} {}",
        scheme.title,
        scheme.description,
        scheme.tags.join(" ")
    )
    .to_lowercase();

    let hits = sector.iter().filter(|&&keyword| text.contains(keyword)).count() as u32;
    if hits == 0 {
        return None;
    }
    let delta = (hits * SECTOR_KEYWORD_STEP).min(weights.moderate_relevance);
    if delta >= weights.low_relevance {
        Some(RuleHit::scored(
            "Sector Relevance",
            format!("Strong alignment with {} sector", scheme.category),
            delta,
        ))
    } else {
        // Weak keyword presence scores without being surfaced.
        Some(RuleHit::silent(delta))
    }
}

fn popularity_rule(
    _profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    if !scheme.is_popular {
        return None;
    }
    Some(RuleHit::scored(
        "Popular Scheme",
        "High adoption rate and success stories".to_string(),
        weights.bonus,
    ))
}

fn recency_rule(
    _profile: &UserProfile,
    scheme: &Scheme,
    weights: &ScoringWeights,
) -> Option<RuleHit> {
    let launch_year = scheme.launch_year()?;
    if launch_year >= Utc::now().year() - 3 {
        return Some(RuleHit::scored(
            "Recent Initiative",
            "Recently launched scheme with modern benefits".to_string(),
            weights.bonus,
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, Eligibility, Gender, IncomeLimit};

    fn create_test_scheme(title: &str, description: &str, category: &str) -> Scheme {
        Scheme {
            id: "test-scheme".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            ministry: String::new(),
            tags: Vec::new(),
            state: None,
            eligibility: Eligibility::default(),
            is_popular: false,
            launch_date: None,
            deadline: None,
        }
    }

    fn weights() -> ScoringWeights {
        ScoringWeights::default()
    }

    #[test]
    fn test_empty_profile_scores_floor_with_no_factors() {
        let profile = UserProfile::default();
        let scheme = create_test_scheme("Test", "Test", "Finance");

        let (score, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(score, 60);
        assert!(factors.is_empty());
    }

    #[test]
    fn test_strong_profile_hits_ceiling_with_sorted_factors() {
        let profile = UserProfile {
            annual_income: Some(50_000),
            age: Some(25),
            gender: Some(Gender::Male),
            state: Some("Maharashtra".to_string()),
            ..UserProfile::default()
        };
        let mut scheme = create_test_scheme("Test", "Test", "Finance");
        scheme.state = Some("Maharashtra".to_string());
        scheme.eligibility = Eligibility {
            income: Some(IncomeLimit {
                max: Some(100_000),
            }),
            age_range: Some(AgeRange {
                min: Some(18),
                max: Some(35),
            }),
            gender: Some("all".to_string()),
            ..Eligibility::default()
        };

        // Raw 40 + 25 + 25 + 20 + 25 clamps to 95; the strong-match bonus
        // cannot lift it further.
        let (score, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(score, 95);
        assert_eq!(factors.len(), 4);
        let factor_weights: Vec<u32> = factors.iter().map(|f| f.weight).collect();
        assert_eq!(factor_weights, vec![25, 25, 25, 20]);
    }

    #[test]
    fn test_nested_income_limit_wins_over_flat() {
        let profile = UserProfile {
            income: Some(80_000),
            ..UserProfile::default()
        };
        let mut scheme = create_test_scheme("Test", "Test", "General");
        scheme.eligibility.income = Some(IncomeLimit {
            max: Some(100_000),
        });
        scheme.eligibility.max_income = Some(100_000);

        let (score, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(score, 65);
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].factor, "Income Eligibility");
        assert!(factors[0].description.contains("₹80,000"));
    }

    #[test]
    fn test_flat_income_limit_fires_when_nested_rejects() {
        let profile = UserProfile {
            income: Some(80_000),
            ..UserProfile::default()
        };
        let mut scheme = create_test_scheme("Test", "Test", "General");
        scheme.eligibility.income = Some(IncomeLimit { max: Some(50_000) });
        scheme.eligibility.max_income = Some(100_000);

        let (score, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(score, 60);
        assert_eq!(factors[0].factor, "Income Range");
        assert_eq!(factors[0].weight, 20);
    }

    #[test]
    fn test_age_range_defaults_open_ends() {
        let profile = UserProfile {
            age: Some(70),
            ..UserProfile::default()
        };
        let mut scheme = create_test_scheme("Test", "Test", "General");
        scheme.eligibility.age_range = Some(AgeRange {
            min: None,
            max: None,
        });

        let (_, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(factors[0].factor, "Perfect Age Match");
        assert!(factors[0].description.contains("(0-100 years)"));
    }

    #[test]
    fn test_upper_age_bound_scores_without_factor() {
        let profile = UserProfile {
            age: Some(30),
            ..UserProfile::default()
        };
        let mut scheme = create_test_scheme("Test", "Test", "General");
        scheme.eligibility.min_age = Some(18);
        scheme.eligibility.max_age = Some(60);

        // Both bounds are satisfied for +30 total, but only the lower bound
        // reports a factor.
        let (score, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(score, 70);
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].factor, "Age Eligibility");
        assert_eq!(factors[0].weight, 15);
    }

    #[test]
    fn test_gender_containment_admits_male_in_female() {
        let profile = UserProfile {
            gender: Some(Gender::Male),
            ..UserProfile::default()
        };
        let mut scheme = create_test_scheme("Test", "Test", "General");
        scheme.eligibility.gender = Some("female".to_string());

        let (_, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(factors[0].factor, "Gender Eligibility");
        assert!(factors[0].description.contains("male applicants"));
    }

    #[test]
    fn test_general_category_admits_any_stated_category() {
        let mut scheme = create_test_scheme("Test", "Test", "General");
        scheme.eligibility.category = Some(vec!["General".to_string()]);

        let listed = UserProfile {
            category: Some("OBC".to_string()),
            ..UserProfile::default()
        };
        let (_, factors) = score_scheme(&listed, &scheme, &weights());
        assert_eq!(factors[0].factor, "Category Match");
        assert!(factors[0].description.contains("OBC"));

        // Without a stated category the rule stays quiet even for an open
        // scheme.
        let anonymous = UserProfile::default();
        let (_, factors) = score_scheme(&anonymous, &scheme, &weights());
        assert!(factors.is_empty());
    }

    #[test]
    fn test_weak_sector_presence_scores_silently() {
        let profile = UserProfile {
            income: Some(50_000),
            ..UserProfile::default()
        };
        let mut scheme = create_test_scheme("Loan and credit support", "Test", "Finance");
        scheme.eligibility.max_income = Some(100_000);

        // Two sector keywords are worth +6 with no reported factor.
        let (score, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(score, 66);
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].factor, "Income Range");
    }

    #[test]
    fn test_uppercase_sector_keywords_never_match_lowercased_text() {
        let profile = UserProfile {
            income: Some(50_000),
            ..UserProfile::default()
        };
        let mut scheme = create_test_scheme("MUDRA support", "Test", "Finance");
        scheme.eligibility.max_income = Some(100_000);

        // "MUDRA" is listed uppercase and the text is lowercased before
        // matching, so the sector rule contributes nothing.
        let (score, _) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(score, 60);
    }

    #[test]
    fn test_farming_land_tiers() {
        let mut profile = UserProfile {
            farming_land: Some(3.0),
            ..UserProfile::default()
        };
        let scheme = create_test_scheme("Test", "Test", "Agriculture & Farming");

        let (_, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(factors[0].factor, "Farming Land Ownership");
        assert_eq!(factors[0].weight, 20);
        assert!(factors[0].description.contains("3 acres"));

        profile.farming_land = Some(6.5);
        let (_, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(factors[0].weight, 25);
        assert!(factors[0].description.contains("6.5 acres"));
    }

    #[test]
    fn test_employment_keyword_hits_are_capped() {
        let profile = UserProfile {
            employment_status: Some(crate::models::EmploymentStatus::Unemployed),
            ..UserProfile::default()
        };
        let scheme = create_test_scheme(
            "Employment generation programme",
            "Job creation to reduce unemployment",
            "Employment",
        );

        // Four keyword hits would be 32 raw, capped at 20.
        let (_, factors) = score_scheme(&profile, &scheme, &weights());
        let employment = factors
            .iter()
            .find(|f| f.factor == "Employment Status Match")
            .unwrap();
        assert_eq!(employment.weight, 20);
    }

    #[test]
    fn test_scheme_bonuses_report_factors() {
        let profile = UserProfile::default();
        let mut scheme = create_test_scheme("Test", "Test", "General");
        scheme.is_popular = true;
        scheme.launch_date = Some(Utc::now().year().to_string());

        let (_, factors) = score_scheme(&profile, &scheme, &weights());
        let names: Vec<&str> = factors.iter().map(|f| f.factor.as_str()).collect();
        assert!(names.contains(&"Popular Scheme"));
        assert!(names.contains(&"Recent Initiative"));
    }

    #[test]
    fn test_factors_truncate_in_rule_order_before_sorting() {
        let profile = UserProfile {
            income: Some(50_000),
            age: Some(30),
            gender: Some(Gender::Male),
            category: Some("OBC".to_string()),
            state: Some("Goa".to_string()),
            occupation: Some("carpenter".to_string()),
            bpl_card_holder: true,
            ..UserProfile::default()
        };
        let mut scheme = create_test_scheme(
            "Test",
            "Carpenter support for poor households",
            "General",
        );
        scheme.eligibility = Eligibility {
            max_income: Some(100_000),
            min_age: Some(18),
            gender: Some("male".to_string()),
            category: Some(vec!["OBC".to_string()]),
            ..Eligibility::default()
        };

        // Seven factors fire; the BPL factor is seventh in rule order and is
        // dropped even though its weight beats the kept 15s.
        let (score, factors) = score_scheme(&profile, &scheme, &weights());
        assert_eq!(score, 95);
        assert_eq!(factors.len(), 6);
        assert!(factors.iter().all(|f| f.factor != "BPL Priority"));
        let factor_weights: Vec<u32> = factors.iter().map(|f| f.weight).collect();
        assert_eq!(factor_weights, vec![20, 20, 20, 15, 15, 15]);
    }

    #[test]
    fn test_format_inr_groups_indian_style() {
        assert_eq!(format_inr(500), "500");
        assert_eq!(format_inr(50_000), "50,000");
        assert_eq!(format_inr(100_000), "1,00,000");
        assert_eq!(format_inr(1_250_000), "12,50,000");
    }
}
