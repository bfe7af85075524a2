// Core algorithm exports
pub mod keywords;
pub mod matcher;
pub mod refine;
pub mod scoring;
pub mod search;

pub use keywords::{employment_keywords, occupation_categories, sector_keywords};
pub use matcher::{Matcher, MatchResult};
pub use refine::{filter_by_category, sort_matches};
pub use scoring::score_scheme;
pub use search::search_schemes;
