// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, Gender, MaritalStatus, EmploymentStatus, Scheme, Eligibility, IncomeLimit, AgeRange, MatchedScheme, MatchingFactor, ScoringWeights};
pub use requests::{MatchRequest, SearchQuery, SortBy};
pub use responses::{MatchResponse, SearchResponse, HealthResponse, ErrorResponse};
