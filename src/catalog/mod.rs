mod career_path;
mod catalog;

pub use career_path::{CareerPath, Milestone, Resource, ResourceType};
pub use catalog::Catalog;
