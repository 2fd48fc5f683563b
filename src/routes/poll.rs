use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for GET /talks.
#[derive(Debug, Deserialize)]
pub struct TalksQuery {
    /// Raw string so a non-numeric value can be rejected with 400 rather
    /// than a generic extractor failure.
    #[serde(rename = "changesSince")]
    changes_since: Option<String>,
}

/// GET /talks - Without `changesSince`, all current talks immediately.
/// With a numeric `changesSince`, the deduplicated changed/deleted set,
/// long-polling until a qualifying change or the timeout when there is
/// nothing new yet.
pub async fn get_talks(State(state): State<AppState>, Query(query): Query<TalksQuery>) -> Response {
    let Some(raw) = query.changes_since else {
        return Json(state.board.list_all()).into_response();
    };

    let since: u64 = match raw.parse() {
        Ok(n) => n,
        Err(_) => return (StatusCode::BAD_REQUEST, "Invalid parameter").into_response(),
    };

    Json(state.board.query_or_wait(since).await).into_response()
}
