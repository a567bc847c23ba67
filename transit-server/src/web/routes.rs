//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;

use crate::domain::StationId;
use crate::planner::{Planner, SearchError, SearchRequest, SelectError, select_best, transfer_count};
use crate::report::Itinerary;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route", get(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stations in the network.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let mut stations: Vec<StationResult> = state
        .network
        .stations()
        .map(StationResult::from_station)
        .collect();
    stations.sort_by(|a, b| a.id.cmp(&b.id));

    Json(StationsResponse { stations })
}

/// Plan the best route between two stations.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let origin = StationId::parse(&req.from).map_err(|e| AppError::BadRequest {
        message: format!("invalid origin station {:?}: {e}", req.from),
    })?;
    let destination = StationId::parse(&req.to).map_err(|e| AppError::BadRequest {
        message: format!("invalid destination station {:?}: {e}", req.to),
    })?;

    let request = SearchRequest::new(origin, destination);
    let planner = Planner::new(&state.network, &state.config);
    let result = planner.search(&request).map_err(AppError::from)?;

    if result.paths.is_empty() {
        return Ok(Json(RouteResponse::unreachable(result.pops)));
    }

    let best = select_best(&state.network, &result.paths).map_err(AppError::from)?;
    let transfers = transfer_count(&state.network, best).map_err(|e| AppError::Internal {
        message: e.to_string(),
    })?;
    let itinerary = Itinerary::from_path(&state.network, best).map_err(|e| AppError::Internal {
        message: e.to_string(),
    })?;

    Ok(Json(RouteResponse::from_route(
        best,
        transfers,
        &itinerary,
        result.paths.len(),
        result.pops,
    )))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            SearchError::Cancelled | SearchError::Budget(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<SelectError> for AppError {
    fn from(e: SelectError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
