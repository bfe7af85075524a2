use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// User profile collected by the portal's multi-step form.
///
/// Every field is optional: an absent field means the corresponding
/// scoring rule does not apply, never that the scheme fails to match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[validate(range(min = 18, max = 100))]
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    /// Social category (e.g. caste category) as free text.
    pub category: Option<String>,
    /// Legacy income field; superseded by `annual_income` when both are set.
    pub income: Option<u64>,
    pub annual_income: Option<u64>,
    pub occupation: Option<String>,
    pub state: Option<String>,
    pub education: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub disability: bool,
    #[serde(default)]
    pub land_ownership: bool,
    pub business_type: Option<String>,
    pub employment_status: Option<EmploymentStatus>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub bpl_card_holder: bool,
    /// Farming land holding in acres.
    pub farming_land: Option<f64>,
}

impl UserProfile {
    /// Income used by the scoring rules: `annual_income` wins over the
    /// legacy `income` field.
    pub fn effective_income(&self) -> Option<u64> {
        self.annual_income.or(self.income)
    }

    /// Canonical form of a submitted profile with the legacy income field
    /// resolved. Pure; the only reconciliation the form data needs.
    pub fn normalized(mut self) -> Self {
        self.income = self.effective_income();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentStatus {
    Employed,
    Unemployed,
    SelfEmployed,
    Student,
    Retired,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "employed",
            EmploymentStatus::Unemployed => "unemployed",
            EmploymentStatus::SelfEmployed => "self-employed",
            EmploymentStatus::Student => "student",
            EmploymentStatus::Retired => "retired",
        }
    }
}

/// Catalog entry for a government scheme. Read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub ministry: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Jurisdiction; `None`, an empty string, or "All States" all mean the
    /// scheme is available pan-India.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_eligibility")]
    pub eligibility: Eligibility,
    #[serde(default)]
    pub is_popular: bool,
    /// Launch date or bare launch year as published in the catalog.
    #[serde(default)]
    pub launch_date: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
}

impl Scheme {
    /// Leading integer of `launch_date`, so both "2021" and "2021-05-01"
    /// resolve to 2021.
    pub fn launch_year(&self) -> Option<i32> {
        let raw = self.launch_date.as_deref()?.trim();
        let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

/// Loosely structured eligibility metadata. Catalog data is not validated
/// up front; a field that is missing or fails to parse is `None`, which the
/// scorer treats as "rule not applicable".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    #[serde(default, deserialize_with = "lenient")]
    pub income: Option<IncomeLimit>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_income: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub age_range: Option<AgeRange>,
    #[serde(default, deserialize_with = "lenient")]
    pub min_age: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_age: Option<u8>,
    /// "all" or a gender word.
    #[serde(default, deserialize_with = "lenient")]
    pub gender: Option<String>,
    /// Eligible social categories; "General" admits any stated category.
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IncomeLimit {
    #[serde(default)]
    pub max: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgeRange {
    #[serde(default)]
    pub min: Option<u8>,
    #[serde(default)]
    pub max: Option<u8>,
}

/// Deserialize a value but fall back to `None` instead of failing when the
/// catalog holds something malformed.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Same fallback for the eligibility block as a whole (e.g. a bare string
/// where an object was expected).
fn lenient_eligibility<'de, D>(deserializer: D) -> Result<Eligibility, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// One reason a scheme matched, shown to the user alongside the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingFactor {
    pub factor: String,
    pub description: String,
    pub weight: u32,
}

/// A scheme with its relevance score and explanatory factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedScheme {
    pub scheme: Scheme,
    pub score: u32,
    pub matching_factors: Vec<MatchingFactor>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub base: u32,
    pub exact_match: u32,
    pub high_relevance: u32,
    pub moderate_relevance: u32,
    pub low_relevance: u32,
    pub bonus: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 40,
            exact_match: 25,
            high_relevance: 20,
            moderate_relevance: 15,
            low_relevance: 10,
            bonus: 8,
        }
    }
}
