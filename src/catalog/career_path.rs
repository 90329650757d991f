use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Video,
    Article,
    Course,
}

/// A learning resource attached to a milestone. No identity of its own.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Milestone {
    /// Unique within the owning career path, not globally.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display sequence. Uniqueness and contiguity are up to the definition.
    pub order: u32,
    pub estimated_days: u32,
    pub resources: Vec<Resource>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CareerPath {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub milestones: Vec<Milestone>,
    pub created_at: DateTime<Utc>,
}
