//! Yojana Match - matching service for Indian government welfare schemes
//!
//! This library scores a citizen profile against a scheme catalog using an
//! ordered list of weighted eligibility rules, producing a ranked match list
//! with human-readable matching factors alongside a keyword search over the
//! same catalog.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{score_scheme, search_schemes, MatchResult, Matcher};
pub use models::{UserProfile, Scheme, MatchedScheme, MatchingFactor, ScoringWeights, MatchRequest, MatchResponse, SearchResponse};
pub use services::SchemeCatalog;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::with_default_weights(std::sync::Arc::new(Vec::new()));
        let result = matcher.match_schemes(&UserProfile::default());
        assert_eq!(result.total_schemes, 0);
    }
}
