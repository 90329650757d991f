use super::models::UserProgress;
use super::progress_store::ProgressStore;
use super::schema::PROGRESS_VERSIONED_SCHEMAS;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct SqliteProgressStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteProgressStore {
    pub fn new<T: AsRef<Path>>(db_path: T) -> Result<Self> {
        let conn = if db_path.as_ref().exists() {
            Connection::open_with_flags(
                db_path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                    | rusqlite::OpenFlags::SQLITE_OPEN_URI
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?
        } else {
            Connection::open(db_path)?
        };
        Self::with_connection(conn)
    }

    /// Volatile store backed by an in-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let schema = PROGRESS_VERSIONED_SCHEMAS.last().unwrap();

        let db_version = conn
            .query_row("PRAGMA user_version;", [], |row| row.get::<usize, i64>(0))
            .context("Failed to read database version")?;

        if db_version > schema.version as i64 {
            bail!("Database version {} is too new", db_version);
        }

        conn.execute_batch(schema.up)
            .context("Failed to initialize progress schema")?;
        conn.execute(&format!("PRAGMA user_version = {}", schema.version), [])?;

        Ok(SqliteProgressStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn parse_progress_row(
    id: String,
    user_id: String,
    career_path_id: String,
    milestones_json: String,
    updated_at: String,
) -> Result<UserProgress> {
    let completed_milestones: Vec<String> = serde_json::from_str(&milestones_json)
        .with_context(|| format!("Malformed milestone set in progress document {}", id))?;
    let updated_at = DateTime::parse_from_rfc3339(&updated_at)
        .with_context(|| format!("Malformed timestamp in progress document {}", id))?
        .with_timezone(&Utc);
    Ok(UserProgress {
        id,
        user_id,
        career_path_id,
        completed_milestones,
        updated_at,
    })
}

impl ProgressStore for SqliteProgressStore {
    fn get_all_user_progress(&self, user_id: &str) -> Result<Vec<UserProgress>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, user_id, career_path_id, completed_milestones, updated_at
             FROM user_progress WHERE user_id = ?1",
        )?;
        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok((
                    row.get::<usize, String>(0)?,
                    row.get::<usize, String>(1)?,
                    row.get::<usize, String>(2)?,
                    row.get::<usize, String>(3)?,
                    row.get::<usize, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, user_id, career_path_id, milestones_json, updated_at)| {
                parse_progress_row(id, user_id, career_path_id, milestones_json, updated_at)
            })
            .collect()
    }

    fn get_user_path_progress(
        &self,
        user_id: &str,
        career_path_id: &str,
    ) -> Result<Option<UserProgress>> {
        let conn = self.conn.lock().unwrap();
        let row = conn
            .query_row(
                "SELECT id, user_id, career_path_id, completed_milestones, updated_at
                 FROM user_progress WHERE user_id = ?1 AND career_path_id = ?2",
                params![user_id, career_path_id],
                |row| {
                    Ok((
                        row.get::<usize, String>(0)?,
                        row.get::<usize, String>(1)?,
                        row.get::<usize, String>(2)?,
                        row.get::<usize, String>(3)?,
                        row.get::<usize, String>(4)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((id, user_id, career_path_id, milestones_json, updated_at)) => Ok(Some(
                parse_progress_row(id, user_id, career_path_id, milestones_json, updated_at)?,
            )),
            None => Ok(None),
        }
    }

    fn insert_user_progress(&self, progress: &UserProgress) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let milestones_json = serde_json::to_string(&progress.completed_milestones)?;
        conn.execute(
            "INSERT INTO user_progress (id, user_id, career_path_id, completed_milestones, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                progress.id,
                progress.user_id,
                progress.career_path_id,
                milestones_json,
                progress.updated_at.to_rfc3339(),
            ],
        )
        .with_context(|| {
            format!(
                "Failed to insert progress for user {} on path {}",
                progress.user_id, progress.career_path_id
            )
        })?;
        Ok(())
    }

    fn update_user_progress(
        &self,
        user_id: &str,
        career_path_id: &str,
        completed_milestones: &[String],
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let milestones_json = serde_json::to_string(completed_milestones)?;
        conn.execute(
            "UPDATE user_progress SET completed_milestones = ?3, updated_at = ?4
             WHERE user_id = ?1 AND career_path_id = ?2",
            params![
                user_id,
                career_path_id,
                milestones_json,
                updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }
}
