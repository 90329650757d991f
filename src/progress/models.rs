//! Progress data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The per-user, per-career-path progress document.
///
/// `id` is a server-generated opaque value; the natural key is
/// `(user_id, career_path_id)`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct UserProgress {
    pub id: String,
    pub user_id: String,
    pub career_path_id: String,
    /// Treated as a set, kept duplicate-free by the update logic.
    pub completed_milestones: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserProgress {
    pub fn new(user_id: &str, career_path_id: &str, completed_milestones: Vec<String>) -> Self {
        UserProgress {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_owned(),
            career_path_id: career_path_id.to_owned(),
            completed_milestones,
            updated_at: Utc::now(),
        }
    }

    /// Non-persisted placeholder returned for pairs with no stored document.
    pub fn empty(user_id: &str, career_path_id: &str) -> Self {
        Self::new(user_id, career_path_id, Vec::new())
    }
}

/// Body of a progress update request.
#[derive(Deserialize, Debug)]
pub struct ProgressUpdate {
    pub milestone_id: String,
    pub completed: bool,
}

/// Confirmation echoed back after an update. The mutated document itself is
/// never returned.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ProgressAck {
    pub success: bool,
    pub milestone_id: String,
    pub completed: bool,
}
