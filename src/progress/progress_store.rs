use super::models::UserProgress;
use anyhow::Result;
use chrono::{DateTime, Utc};

/// Document-store surface for progress records.
///
/// Documents are addressed by field filters, never by the generated `id`.
pub trait ProgressStore: Send + Sync {
    /// Returns every progress document for the user, in the store's natural
    /// order. A user with no documents yields an empty vec, not an error.
    fn get_all_user_progress(&self, user_id: &str) -> Result<Vec<UserProgress>>;

    /// Returns the single document for `(user_id, career_path_id)`.
    /// Returns Ok(None) if no such document exists.
    /// Returns Err if there is a database error.
    fn get_user_path_progress(
        &self,
        user_id: &str,
        career_path_id: &str,
    ) -> Result<Option<UserProgress>>;

    /// Inserts a new progress document.
    /// Returns Err if a document for the same pair already exists.
    fn insert_user_progress(&self, progress: &UserProgress) -> Result<()>;

    /// Rewrites the completed set and timestamp of the document keyed by
    /// `(user_id, career_path_id)`. The set is replaced wholesale.
    fn update_user_progress(
        &self,
        user_id: &str,
        career_path_id: &str,
        completed_milestones: &[String],
        updated_at: DateTime<Utc>,
    ) -> Result<()>;
}
