use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::course::Course;
use crate::domain::school::School;

pub mod courses;
pub mod schools;

#[cfg(test)]
pub mod mock;

/// Resource holding the schools rating list.
pub const SCHOOLS_RESOURCE: &str = "schools.json";

/// Errors produced by the data-source backends.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("failed to read resource: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse resource: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read access to the per-category course collections.
pub trait CourseReader {
    /// Fetch the full collection behind a named resource. A `null` payload
    /// is an empty collection, not an error.
    fn list_courses(&self, resource: &str) -> RepositoryResult<Vec<Course>>;
}

/// Read access to the schools rating list.
pub trait SchoolReader {
    fn list_schools(&self) -> RepositoryResult<Vec<School>>;
}

#[derive(Clone)]
/// File-backed repository reading the exported JSON resources from a data
/// directory. Files are re-read on every fetch; the catalog store fetches
/// once per category switch, so there is nothing worth caching here.
pub struct JsonDataRepository {
    data_dir: PathBuf,
}

impl JsonDataRepository {
    /// Create a repository rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn resource_path(&self, resource: &str) -> RepositoryResult<PathBuf> {
        // Resources are plain file names from the static configuration;
        // anything that looks like a path is rejected.
        if resource.is_empty() || Path::new(resource).components().count() != 1 {
            return Err(RepositoryError::NotFound(resource.to_string()));
        }
        Ok(self.data_dir.join(resource))
    }

    fn read_resource(&self, resource: &str) -> RepositoryResult<String> {
        let path = self.resource_path(resource)?;
        if !path.is_file() {
            return Err(RepositoryError::NotFound(resource.to_string()));
        }
        Ok(std::fs::read_to_string(path)?)
    }
}
