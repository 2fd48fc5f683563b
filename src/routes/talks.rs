use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{Comment, PostCommentRequest, PutTalkRequest, Talk};
use crate::state::AppState;

/// PUT /talks/{title} - Create or fully replace a talk.
pub async fn put_talk(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(req): Json<PutTalkRequest>,
) -> StatusCode {
    let talk = Talk {
        title,
        presenter: req.presenter,
        summary: req.summary,
        comments: Vec::new(),
    };
    tracing::debug!(title = %talk.title, "storing talk");
    state.board.put_talk(talk);
    StatusCode::NO_CONTENT
}

/// GET /talks/{title} - Get a single talk.
pub async fn get_talk(State(state): State<AppState>, Path(title): Path<String>) -> Response {
    match state.board.get_talk(&title) {
        Some(talk) => Json(talk).into_response(),
        None => (StatusCode::NOT_FOUND, format!("No talk '{}' found", title)).into_response(),
    }
}

/// DELETE /talks/{title} - Delete a talk. Responds 204 whether or not it
/// existed; only an actual removal is logged as a change.
pub async fn delete_talk(State(state): State<AppState>, Path(title): Path<String>) -> StatusCode {
    if state.board.delete_talk(&title) {
        tracing::debug!(title = %title, "deleted talk");
    }
    StatusCode::NO_CONTENT
}

/// POST /talks/{title}/comments - Append a comment to a talk.
pub async fn post_comment(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(req): Json<PostCommentRequest>,
) -> Response {
    let comment = Comment {
        author: req.author,
        message: req.message,
    };
    match state.board.add_comment(&title, comment) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    }
}
