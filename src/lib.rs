pub mod board;
pub mod changelog;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod waiters;

pub use board::TalkBoard;
pub use changelog::{ChangeEvent, ChangeLog, RetentionPolicy};
pub use clock::Clock;
pub use config::Config;
pub use error::StoreError;
pub use models::{ChangedTalk, Comment, Talk, TalkUpdates};
pub use routes::create_router;
pub use state::AppState;
pub use store::TalkStore;
pub use waiters::{Waiter, WaiterRegistry, WaiterToken};
