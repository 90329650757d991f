use super::CareerPath;
use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Arc;

const BUILTIN_PATHS_JSON: &str = include_str!("builtin_paths.json");

lazy_static! {
    static ref BUILTIN_CATALOG: Arc<Catalog> = Arc::new(
        Catalog::from_json(BUILTIN_PATHS_JSON)
            .expect("The builtin career path definition must parse, it is embedded in the binary.")
    );
}

/// Read-only collection of career paths, populated once at startup.
///
/// Listing order is the definition order; lookups go through an id index.
#[derive(Debug)]
pub struct Catalog {
    paths: Vec<CareerPath>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The catalog embedded in the binary. Parsed once, shared process-wide.
    pub fn builtin() -> Arc<Catalog> {
        BUILTIN_CATALOG.clone()
    }

    pub fn new(paths: Vec<CareerPath>) -> Result<Catalog> {
        let mut index = HashMap::with_capacity(paths.len());
        for (position, path) in paths.iter().enumerate() {
            if index.insert(path.id.clone(), position).is_some() {
                bail!("Duplicate career path id \"{}\"", path.id);
            }
        }
        Ok(Catalog { paths, index })
    }

    pub fn from_json(json: &str) -> Result<Catalog> {
        let paths: Vec<CareerPath> =
            serde_json::from_str(json).context("Failed to parse career path definition")?;
        Catalog::new(paths)
    }

    /// All career paths in definition order.
    pub fn career_paths(&self) -> &[CareerPath] {
        &self.paths
    }

    pub fn get_career_path(&self, id: &str) -> Option<&CareerPath> {
        self.index.get(id).map(|position| &self.paths[*position])
    }

    pub fn get_career_paths_count(&self) -> usize {
        self.paths.len()
    }
}
