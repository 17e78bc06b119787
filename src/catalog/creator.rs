use chrono::Local;
use tracing::info;

use crate::error::TaskhelperError;
use crate::form::rules::{parse_date, Field};
use crate::form::TaskCreator;
use crate::models::{format_price, Category, DraftTask, PreferredTime, Task};

use super::Catalog;

const URGENT_TAG: &str = "緊急";
const NEW_STATUS: &str = "新規";

/// Appends the draft as a new catalog entry. Nothing is persisted.
impl TaskCreator for Catalog {
    fn create_task(&mut self, draft: &DraftTask) -> Result<Task, TaskhelperError> {
        let invalid = |field: Field| {
            TaskhelperError::validation(format!("Draft field '{}' is not valid", field.as_str()))
        };
        let category =
            Category::from_str(draft.category.trim()).ok_or_else(|| invalid(Field::Category))?;
        let budget: u32 = draft
            .budget
            .trim()
            .parse()
            .map_err(|_| invalid(Field::Budget))?;
        let date =
            parse_date(&draft.preferred_date).ok_or_else(|| invalid(Field::PreferredDate))?;
        let time = PreferredTime::from_str(draft.preferred_time.trim())
            .ok_or_else(|| invalid(Field::PreferredTime))?;

        let mut tags = Vec::new();
        if draft.urgent {
            tags.push(URGENT_TAG.to_string());
        }

        let location = draft.location.trim().to_string();
        let task = Task {
            id: self.next_id()?,
            title: draft.title.trim().to_string(),
            category,
            location: location.clone(),
            location_name: location,
            price: format_price(budget),
            posted_at: Local::now().naive_local(),
            deadline: format!("{} {}", date.format("%Y-%m-%d"), time.display_name()),
            description: draft.description.trim().to_string(),
            tags,
            status: NEW_STATUS.to_string(),
        };
        info!(id = task.id, category = category.as_str(), "task added to catalog");
        self.tasks.push(task.clone());
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{QuickFilter, TaskList};

    fn draft() -> DraftTask {
        DraftTask {
            category: "cleaning".into(),
            title: "Window cleaning".into(),
            description: "Clean six windows in a two bedroom flat".into(),
            location: "Meguro".into(),
            budget: "12000".into(),
            preferred_date: "2030-05-01".into(),
            preferred_time: "afternoon".into(),
            urgent: true,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_created_task_joins_catalog() {
        let mut catalog = Catalog::sample().unwrap();
        let task = catalog.create_task(&draft()).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.price, "12,000");
        assert_eq!(task.category, Category::Cleaning);
        assert_eq!(task.tags, vec![URGENT_TAG.to_string()]);
        assert!(task.deadline.starts_with("2030-05-01"));
        assert_eq!(catalog.len(), 7);

        let mut list = TaskList::new(catalog);
        assert_eq!(list.filtered_tasks()[0].id, 7);
        list.quick_search(QuickFilter::Urgent);
        let ids: Vec<u32> = list.filtered_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 1]);
    }

    #[test]
    fn test_id_space_exhausted() {
        let mut template = Catalog::sample().unwrap().tasks()[0].clone();
        template.id = u32::MAX;
        let mut catalog = Catalog::new(vec![template]).unwrap();
        let err = catalog.create_task(&draft()).unwrap_err();
        assert_eq!(err.code.as_str(), "CATALOG_ERROR");
        assert_eq!(err.message, "task ids exhausted");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalid_draft_rejected() {
        let mut catalog = Catalog::default();
        let mut d = draft();
        d.budget = "lots".into();
        let err = catalog.create_task(&d).unwrap_err();
        assert_eq!(err.code.as_str(), "VALIDATION_ERROR");
        assert!(catalog.is_empty());
    }
}
