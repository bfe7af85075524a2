use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{refine, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, MatchRequest, MatchResponse, SearchQuery, SearchResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_search_limit: usize,
    pub max_search_limit: usize,
}

/// Configure all scheme-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/schemes/match", web::post().to(match_schemes))
        .route("/schemes/search", web::get().to(search_schemes));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let schemes_loaded = state.matcher.total_schemes();
    let status = if schemes_loaded > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schemes_loaded,
        timestamp: chrono::Utc::now(),
    })
}

/// Match the catalog against a submitted profile
///
/// POST /api/v1/schemes/match
///
/// Request body:
/// ```json
/// {
///   "age": 25,
///   "gender": "male",
///   "annualIncome": 50000,
///   "state": "Maharashtra",
///   "interests": ["farming"],
///   "categoryFilter": "Agriculture",
///   "sortBy": "relevance"
/// }
/// ```
async fn match_schemes(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request = req.into_inner();
    let profile = request.profile.normalized();

    let result = state.matcher.match_schemes(&profile);
    let total_schemes = result.total_schemes;

    if total_schemes == 0 {
        tracing::warn!("Scheme catalog is empty, returning no matches");
    } else if let Some(best) = result.matches.first() {
        let mean =
            result.matches.iter().map(|m| m.score).sum::<u32>() / result.matches.len() as u32;
        tracing::debug!(
            "Scored {} schemes: best {}, mean {}",
            result.matches.len(),
            best.score,
            mean
        );
    }

    let mut matches =
        refine::filter_by_category(result.matches, request.category_filter.as_deref());
    refine::sort_matches(&mut matches, request.sort_by);

    let response = MatchResponse {
        total_schemes,
        total_results: matches.len(),
        matches,
    };

    tracing::info!(
        "Returning {} of {} schemes for profile match",
        response.total_results,
        total_schemes
    );

    HttpResponse::Ok().json(response)
}

/// Search the catalog by keyword
///
/// GET /api/v1/schemes/search?q=housing&limit=20
///
/// A blank query browses the catalog. The limit falls back to the
/// configured default and is capped by the configured maximum.
async fn search_schemes(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let limit = query
        .limit
        .unwrap_or(state.default_search_limit)
        .min(state.max_search_limit);

    tracing::info!("Searching schemes for \"{}\", limit: {}", query.q, limit);

    let results = state.matcher.search(&query.q, limit);

    HttpResponse::Ok().json(SearchResponse {
        total_results: results.len(),
        query: query.q.clone(),
        results,
    })
}
