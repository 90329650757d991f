pub mod models;
mod progress_store;
mod schema;
mod sqlite_progress_store;
mod tracker;

pub use models::{ProgressAck, ProgressUpdate, UserProgress};
pub use progress_store::ProgressStore;
pub use schema::PROGRESS_VERSIONED_SCHEMAS;
pub use sqlite_progress_store::SqliteProgressStore;
pub use tracker::ProgressTracker;
