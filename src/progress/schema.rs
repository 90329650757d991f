//! Schema definition for the progress database.

/// Versioned schema for the progress tables.
pub struct ProgressSchema {
    pub version: usize,
    pub up: &'static str,
}

/// Milestone sets are stored as JSON text, timestamps as ISO-8601 text, so a
/// row round-trips the full document without extra join tables.
pub const PROGRESS_VERSIONED_SCHEMAS: &[ProgressSchema] = &[ProgressSchema {
    version: 1,
    up: r#"
            CREATE TABLE IF NOT EXISTS user_progress (
                id TEXT PRIMARY KEY NOT NULL,
                user_id TEXT NOT NULL,
                career_path_id TEXT NOT NULL,
                completed_milestones TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE (user_id, career_path_id)
            );

            CREATE INDEX IF NOT EXISTS idx_user_progress_user_id ON user_progress(user_id);
        "#,
}];
