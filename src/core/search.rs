use crate::models::{MatchedScheme, MatchingFactor, Scheme};

/// Flat score reported when browsing with a blank query.
const BROWSE_SCORE: u32 = 75;
/// Score band for any scheme that matched at least one term.
const MIN_SCORE: u32 = 70;
const MAX_SCORE: u32 = 95;
/// Terms shorter than this are dropped before matching.
const MIN_TERM_LEN: usize = 3;
/// Factors reported per search hit, kept in field order.
const MAX_FACTORS: usize = 3;

/// Points per matched term, by field.
const TITLE_HIT: u32 = 25;
const DESCRIPTION_HIT: u32 = 15;
const CATEGORY_HIT: u32 = 20;
const TAG_HIT: u32 = 10;

/// Free-text search over the catalog.
///
/// A blank query is a browse: the first `limit` schemes come back with a
/// flat score. Otherwise the lowercased query is split on spaces, short
/// terms are dropped, and each remaining term is matched per field. Schemes
/// without a single hit are excluded and positive scores clamp to 70-95.
pub fn search_schemes(schemes: &[Scheme], query: &str, limit: usize) -> Vec<MatchedScheme> {
    if query.trim().is_empty() {
        return schemes
            .iter()
            .take(limit)
            .map(|scheme| MatchedScheme {
                scheme: scheme.clone(),
                score: BROWSE_SCORE,
                matching_factors: vec![MatchingFactor {
                    factor: "Available Scheme".to_string(),
                    description: "Open for eligible applicants".to_string(),
                    weight: BROWSE_SCORE,
                }],
            })
            .collect();
    }

    let query = query.to_lowercase();
    let terms: Vec<&str> = query
        .split(' ')
        .filter(|term| term.len() >= MIN_TERM_LEN)
        .collect();

    let mut matches: Vec<MatchedScheme> = schemes
        .iter()
        .filter_map(|scheme| {
            let (score, factors) = score_search_hit(scheme, &terms);
            if score == 0 {
                return None;
            }
            Some(MatchedScheme {
                scheme: scheme.clone(),
                score,
                matching_factors: factors,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    matches
}

fn score_search_hit(scheme: &Scheme, terms: &[&str]) -> (u32, Vec<MatchingFactor>) {
    let mut score = 0;
    let mut factors = Vec::new();

    let title = scheme.title.to_lowercase();
    let title_hits: Vec<&str> = terms
        .iter()
        .copied()
        .filter(|term| title.contains(term))
        .collect();
    if !title_hits.is_empty() {
        let weight = title_hits.len() as u32 * TITLE_HIT;
        score += weight;
        factors.push(MatchingFactor {
            factor: "Title Match".to_string(),
            description: format!("Title contains \"{}\"", title_hits.join(", ")),
            weight,
        });
    }

    let description = scheme.description.to_lowercase();
    let description_hits = terms
        .iter()
        .filter(|&&term| description.contains(term))
        .count() as u32;
    if description_hits > 0 {
        let weight = description_hits * DESCRIPTION_HIT;
        score += weight;
        factors.push(MatchingFactor {
            factor: "Description Match".to_string(),
            description: "Description relevant to search terms".to_string(),
            weight,
        });
    }

    // Category and tag hits adjust the score without reporting factors.
    let category = scheme.category.to_lowercase();
    for &term in terms {
        if category.contains(term) {
            score += CATEGORY_HIT;
        }
        if scheme.tags.iter().any(|tag| tag.to_lowercase().contains(term)) {
            score += TAG_HIT;
        }
    }

    if score > 0 {
        score = score.clamp(MIN_SCORE, MAX_SCORE);
    }
    factors.truncate(MAX_FACTORS);

    (score, factors)
}
