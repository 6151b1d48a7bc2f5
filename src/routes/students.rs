use actix_web::{web, HttpResponse, Responder};
use crate::core::filter;
use crate::core::threshold::FilterError;
use crate::models::{
    AboveThresholdRequest, ErrorResponse, HealthResponse, InternalErrorResponse,
};
use crate::services::StudentStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<StudentStore>,
}

/// Configure all student-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/above-threshold", web::post().to(above_threshold));
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.dataset.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Students above threshold endpoint
///
/// POST /students/above-threshold
///
/// Request body:
/// ```json
/// {
///   "threshold": 400
/// }
/// ```
async fn above_threshold(
    state: web::Data<AppState>,
    req: web::Json<AboveThresholdRequest>,
) -> impl Responder {
    let outcome = filter::above_threshold(state.dataset.records(), req.threshold.as_ref());

    match outcome {
        Ok(matches) => {
            tracing::info!(
                "Threshold query matched {} of {} students",
                matches.count,
                state.dataset.len()
            );
            HttpResponse::Ok().json(matches)
        }
        Err(FilterError::Internal(details)) => {
            tracing::error!("Failed to process threshold query: {}", details);
            HttpResponse::InternalServerError().json(InternalErrorResponse {
                error: FilterError::Internal(details.clone()).to_string(),
                details,
            })
        }
        Err(err) => {
            tracing::info!("Rejected threshold query: {}", err);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: err.to_string(),
            })
        }
    }
}
