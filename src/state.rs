use std::sync::Arc;

use crate::board::TalkBoard;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<TalkBoard>,
}

impl AppState {
    pub fn new(board: TalkBoard) -> Self {
        Self {
            board: Arc::new(board),
        }
    }
}
