use actix_web::{web, HttpResponse, Responder};
use crate::core::{calculate_match_score, enhance_match_score, generate_introduction, Matcher};
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, IntroduceRequest,
    ScorePairRequest,
};
use crate::services::{ProfileRoster, RosterError};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<ProfileRoster>,
    pub matcher: Matcher,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/customers", web::get().to(list_customers))
        .route("/customers/{id}", web::get().to(get_customer))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/score", web::post().to(score_pair))
        .route("/matches/introduce", web::post().to(introduce));
}

fn error_response(
    status: actix_web::http::StatusCode,
    error: &str,
    message: String,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

fn roster_error_response(err: RosterError) -> HttpResponse {
    use actix_web::http::StatusCode;

    match err {
        RosterError::NotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "Customer not found", err.to_string())
        }
        RosterError::InvalidProfile(_) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, "Invalid profile", err.to_string())
        }
        RosterError::DuplicateId(_) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Roster error", err.to_string())
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.roster.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        roster_size: state.roster.len(),
    })
}

/// List customer summaries
///
/// GET /api/v1/customers
async fn list_customers(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.roster.summaries())
}

/// Fetch one customer profile
///
/// GET /api/v1/customers/{id}
async fn get_customer(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.roster.get(&path) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => roster_error_response(e),
    }
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "customerId": "string",
///   "limit": 10,
///   "enhance": true
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    let subject = match state.roster.get(&req.customer_id) {
        Ok(profile) => profile,
        Err(e) => return roster_error_response(e),
    };

    // Cap limit to keep responses bounded
    let limit = req
        .limit
        .map(|limit| limit as usize)
        .unwrap_or_else(|| state.matcher.default_limit())
        .min(state.max_limit);
    let enhance = req.enhance.unwrap_or_else(|| state.matcher.enhances());

    tracing::info!("Finding matches for customer: {}, limit: {}", subject.id, limit);

    let result = match state
        .matcher
        .find_matches_with(subject, state.roster.profiles(), Some(limit), enhance)
    {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Ranking failed for {}: {}", subject.id, e);
            return error_response(
                actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid profile",
                e.to_string(),
            );
        }
    };

    tracing::info!(
        "Returning {} matches for customer {} (from {} eligible candidates)",
        result.matches.len(),
        subject.id,
        result.eligible_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        customer_id: subject.id.clone(),
        matches: result.matches,
        total_candidates: result.total_candidates,
        eligible_candidates: result.eligible_candidates,
    })
}

/// Score an ad-hoc pair of profiles
///
/// POST /api/v1/matches/score
async fn score_pair(req: web::Json<ScorePairRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    let base = calculate_match_score(&req.subject, &req.candidate);
    let score = if req.enhance {
        enhance_match_score(&base, &req.subject, &req.candidate)
    } else {
        base
    };

    tracing::debug!(
        "Scored {} -> {}: {}",
        req.subject.id,
        req.candidate.id,
        score.score
    );

    HttpResponse::Ok().json(score)
}

/// Introduce one roster customer to another
///
/// POST /api/v1/matches/introduce
///
/// Request body:
/// ```json
/// {
///   "customerId": "string",
///   "matchId": "string"
/// }
/// ```
async fn introduce(
    state: web::Data<AppState>,
    req: web::Json<IntroduceRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    let (subject, candidate) = match (
        state.roster.get(&req.customer_id),
        state.roster.get(&req.match_id),
    ) {
        (Ok(subject), Ok(candidate)) => (subject, candidate),
        (Err(e), _) | (_, Err(e)) => return roster_error_response(e),
    };

    let base = calculate_match_score(subject, candidate);
    let score = enhance_match_score(&base, subject, candidate);
    let introduction = generate_introduction(subject, candidate, &score);

    tracing::info!(
        "Generated introduction for {} -> {} (score {})",
        subject.id,
        candidate.id,
        score.score
    );

    HttpResponse::Ok().json(introduction)
}
