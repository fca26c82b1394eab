use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use super::engine;
use super::types::{ErrorResponse, HealthResponse, SearchRequest};
use crate::catalog::store::LabStore;

const SEARCH_FAILED_MESSAGE: &str = "Search is temporarily unavailable. Please try again later.";

/// GET /api/labs-search
///
/// Raw pairs rather than a typed struct so repeated `disciplines` parameters
/// all arrive. Any failure inside the pipeline is contained here: the detail
/// is logged server-side and the client gets a uniform 500 with no internals.
pub async fn handle_labs_search(
    Query(params): Query<Vec<(String, String)>>,
    Extension(store): Extension<Arc<LabStore>>,
) -> Response {
    let request = SearchRequest::from_pairs(&params);

    match panic::catch_unwind(AssertUnwindSafe(|| engine::run(&store, &request))) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(cause) => {
            tracing::error!("Search pipeline failed: {}", panic_message(cause.as_ref()));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: SEARCH_FAILED_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /api/health - liveness probe for deployment tooling.
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Lab directory service is running".to_string(),
    })
}

fn panic_message(cause: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
