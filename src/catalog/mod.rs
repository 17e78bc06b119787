//! The fixed in-memory task catalog a list view filters over.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::TaskhelperError;
use crate::models::{parse_price, Task};

pub mod creator;
pub mod sample;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tasks: Vec<Task>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tasks: Vec<Task>,
}

impl Catalog {
    /// Ids must be unique and every price must parse.
    pub fn new(tasks: Vec<Task>) -> Result<Self, TaskhelperError> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(TaskhelperError::catalog(format!(
                    "Duplicate task id {} in catalog",
                    task.id
                )));
            }
            if parse_price(&task.price).is_none() {
                return Err(TaskhelperError::catalog(format!(
                    "Task {} has an unparseable price '{}'",
                    task.id, task.price
                )));
            }
        }
        Ok(Self { tasks })
    }

    pub fn sample() -> Result<Self, TaskhelperError> {
        Self::from_json(sample::TASKS_JSON)
    }

    pub fn from_json(content: &str) -> Result<Self, TaskhelperError> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|e| TaskhelperError::catalog(format!("Invalid catalog JSON: {e}")))?;
        Self::new(file.tasks)
    }

    pub fn load(path: &Path) -> Result<Self, TaskhelperError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TaskhelperError::catalog(format!("Cannot read catalog {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json(&content)?;
        debug!(path = %path.display(), tasks = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u32) -> Result<&Task, TaskhelperError> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskhelperError::task_not_found(id))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn next_id(&self) -> Result<u32, TaskhelperError> {
        let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        max.checked_add(1).ok_or_else(|| TaskhelperError::catalog("task ids exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_parses() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(3).unwrap().location, "minato");
        assert_eq!(catalog.get(99).unwrap_err().code.as_str(), "TASK_NOT_FOUND");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut tasks = Catalog::sample().unwrap().tasks().to_vec();
        tasks[1].id = tasks[0].id;
        let err = Catalog::new(tasks).unwrap_err();
        assert_eq!(err.code.as_str(), "CATALOG_ERROR");
        assert!(err.message.contains("Duplicate"));
    }

    #[test]
    fn test_bad_price_rejected() {
        let mut tasks = Catalog::sample().unwrap().tasks().to_vec();
        tasks[0].price = "ask me".into();
        assert!(Catalog::new(tasks).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, sample::TASKS_JSON).unwrap();
        assert_eq!(Catalog::load(&path).unwrap().len(), 6);

        fs::write(&path, "{\"tasks\": 3}").unwrap();
        assert!(Catalog::load(&path).is_err());
        assert!(Catalog::load(&dir.path().join("missing.json")).is_err());
    }
}
