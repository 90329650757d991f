use super::models::{ProgressAck, UserProgress};
use super::progress_store::ProgressStore;
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;

/// Progress semantics on top of a [`ProgressStore`].
///
/// Milestone ids and career path ids are accepted as given; nothing here
/// checks them against the catalog.
pub struct ProgressTracker {
    store: Arc<dyn ProgressStore>,
}

impl ProgressTracker {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        ProgressTracker { store }
    }

    /// Every stored progress document for the user, in store order.
    pub fn get_all_progress(&self, user_id: &str) -> Result<Vec<UserProgress>> {
        self.store.get_all_user_progress(user_id)
    }

    /// The document for `(user_id, career_path_id)`, or an empty placeholder
    /// when none exists. The placeholder is never written to the store, so
    /// reading leaves no trace.
    pub fn get_path_progress(&self, user_id: &str, career_path_id: &str) -> Result<UserProgress> {
        match self.store.get_user_path_progress(user_id, career_path_id)? {
            Some(progress) => Ok(progress),
            None => Ok(UserProgress::empty(user_id, career_path_id)),
        }
    }

    /// Adds or removes a milestone in the completed set of the pair's
    /// document, creating the document on first touch.
    ///
    /// Both directions are idempotent. `updated_at` is refreshed even when
    /// the set does not change, and the whole set is rewritten on every call.
    /// The load and the write are two separate store calls with nothing
    /// holding the pair in between; concurrent updates to the same pair can
    /// overwrite each other's toggle.
    pub fn update_progress(
        &self,
        user_id: &str,
        career_path_id: &str,
        milestone_id: &str,
        completed: bool,
    ) -> Result<ProgressAck> {
        match self.store.get_user_path_progress(user_id, career_path_id)? {
            Some(existing) => {
                let mut completed_milestones = existing.completed_milestones;
                if completed {
                    if !completed_milestones.iter().any(|m| m == milestone_id) {
                        completed_milestones.push(milestone_id.to_owned());
                    }
                } else {
                    completed_milestones.retain(|m| m != milestone_id);
                }
                self.store.update_user_progress(
                    user_id,
                    career_path_id,
                    &completed_milestones,
                    Utc::now(),
                )?;
            }
            None => {
                let completed_milestones = if completed {
                    vec![milestone_id.to_owned()]
                } else {
                    Vec::new()
                };
                let progress = UserProgress::new(user_id, career_path_id, completed_milestones);
                self.store.insert_user_progress(&progress)?;
            }
        }

        Ok(ProgressAck {
            success: true,
            milestone_id: milestone_id.to_owned(),
            completed,
        })
    }
}
