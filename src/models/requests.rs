use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::UserProfile;

/// Request to match the catalog against a submitted profile
///
/// The profile fields sit at the top level of the JSON body; the two
/// presentation knobs ride along beside them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: UserProfile,
    #[serde(default)]
    #[serde(alias = "category_filter", rename = "categoryFilter")]
    pub category_filter: Option<String>,
    #[serde(default)]
    #[serde(alias = "sort_by", rename = "sortBy")]
    pub sort_by: SortBy,
}

/// Presentation order for the ranked match list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Newest,
    Deadline,
}

/// Query parameters for catalog search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}
