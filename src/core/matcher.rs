use std::sync::Arc;

use crate::core::{
    scoring::{score_scheme, MAX_SCORE},
    search::search_schemes,
};
use crate::models::{MatchedScheme, Scheme, ScoringWeights, UserProfile};

/// Matches ranked this high get spread apart after sorting.
const TOP_BOOST_WINDOW: usize = 10;
/// Scores at or above this are left alone by the boost.
const BOOST_CUTOFF: u32 = 90;

/// Result of scoring the whole catalog for one profile
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchedScheme>,
    pub total_schemes: usize,
}

/// Main matching orchestrator - scores one catalog snapshot per profile
///
/// # Pipeline Stages
/// 1. Per-scheme rule evaluation and score normalization
/// 2. Stable ranking by descending score
/// 3. Top-of-ranking boost
#[derive(Debug, Clone)]
pub struct Matcher {
    schemes: Arc<Vec<Scheme>>,
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(schemes: Arc<Vec<Scheme>>, weights: ScoringWeights) -> Self {
        Self { schemes, weights }
    }

    pub fn with_default_weights(schemes: Arc<Vec<Scheme>>) -> Self {
        Self {
            schemes,
            weights: ScoringWeights::default(),
        }
    }

    /// Score every catalog scheme against a profile and rank the results
    ///
    /// # Arguments
    /// * `profile` - The normalized user profile
    ///
    /// # Returns
    /// MatchResult with every scheme scored, ranked and boosted
    pub fn match_schemes(&self, profile: &UserProfile) -> MatchResult {
        let total_schemes = self.schemes.len();

        let mut matches: Vec<MatchedScheme> = self
            .schemes
            .iter()
            .map(|scheme| {
                let (score, matching_factors) = score_scheme(profile, scheme, &self.weights);
                MatchedScheme {
                    scheme: scheme.clone(),
                    score,
                    matching_factors,
                }
            })
            .collect();

        // Stable sort keeps catalog order between equal scores.
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        // Spread the head of the ranking apart. The boost runs after the
        // sort and is not followed by a re-sort, so a boosted entry can end
        // up above its unboosted neighbor.
        for (index, entry) in matches.iter_mut().take(TOP_BOOST_WINDOW).enumerate() {
            if entry.score < BOOST_CUTOFF {
                entry.score =
                    (entry.score + (TOP_BOOST_WINDOW - index) as u32).min(MAX_SCORE);
            }
        }

        MatchResult {
            matches,
            total_schemes,
        }
    }

    /// Free-text catalog search, delegated to the search scorer
    pub fn search(&self, query: &str, limit: usize) -> Vec<MatchedScheme> {
        search_schemes(&self.schemes, query, limit)
    }

    pub fn total_schemes(&self) -> usize {
        self.schemes.len()
    }
}
