//! Requester and helper dashboards. Both are the same status-bucket filter
//! over a set of named views, parameterized by a per-role status table.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::catalog::sample;
use crate::error::TaskhelperError;
use crate::filter::status::{self, StatusMapping};
use crate::models::DashboardTask;
use crate::notify::Notifications;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Requester,
    Helper,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requester => "requester",
            Self::Helper => "helper",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "requester" => Some(Self::Requester),
            "helper" => Some(Self::Helper),
            _ => None,
        }
    }

    pub fn views(&self) -> [&'static str; 2] {
        match self {
            Self::Requester => ["posted", "completed"],
            Self::Helper => ["applied", "completed"],
        }
    }

    pub fn status_mapping(&self) -> StatusMapping {
        match self {
            Self::Requester => StatusMapping::from_pairs([
                ("recruiting", "recruiting"),
                ("in-progress", "in-progress"),
                ("pending-payment", "pending-payment"),
                ("rated", "rated"),
                ("unrated", "unrated"),
            ]),
            Self::Helper => StatusMapping::from_pairs([
                ("pending", "pending"),
                ("accepted", "accepted"),
                ("in-progress", "in-progress"),
                ("rejected", "rejected"),
                ("paid", "paid"),
                ("pending-payment", "pending-payment"),
            ]),
        }
    }

    pub fn status_label(&self, status: &str) -> &'static str {
        match (self, status) {
            (Self::Requester, "recruiting") => "Recruiting",
            (Self::Requester, "rated") => "Rated",
            (Self::Requester, "unrated") => "Awaiting your rating",
            (Self::Requester, "cancelled") => "Cancelled",
            (Self::Helper, "pending") => "Under review",
            (Self::Helper, "accepted") => "Accepted",
            (Self::Helper, "rejected") => "Not selected",
            (Self::Helper, "paid") => "Paid",
            (_, "in-progress") => "In progress",
            (_, "pending-payment") => "Awaiting payment",
            _ => "Unknown",
        }
    }

    fn removal_message(&self) -> &'static str {
        match self {
            Self::Requester => "The task was deleted.",
            Self::Helper => "Your application was withdrawn.",
        }
    }
}

#[derive(Debug, Deserialize)]
struct DashboardFile {
    requester: BTreeMap<String, Vec<DashboardTask>>,
    helper: BTreeMap<String, Vec<DashboardTask>>,
}

#[derive(Debug, Clone)]
struct View {
    name: &'static str,
    tasks: Vec<DashboardTask>,
    filter: String,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    role: Role,
    views: Vec<View>,
    active: usize,
    mapping: StatusMapping,
    notifications: Notifications,
}

impl Dashboard {
    /// Views the role knows about but `tasks` lacks start empty.
    pub fn new(role: Role, mut tasks: BTreeMap<String, Vec<DashboardTask>>) -> Self {
        let views = role
            .views()
            .into_iter()
            .map(|name| View {
                name,
                tasks: tasks.remove(name).unwrap_or_default(),
                filter: status::ALL.to_string(),
            })
            .collect();
        Self {
            role,
            views,
            active: 0,
            mapping: role.status_mapping(),
            notifications: Notifications::none(),
        }
    }

    pub fn sample(role: Role) -> Result<Self, TaskhelperError> {
        Self::from_json(role, sample::DASHBOARD_JSON)
    }

    pub fn from_json(role: Role, content: &str) -> Result<Self, TaskhelperError> {
        let file: DashboardFile = serde_json::from_str(content)
            .map_err(|e| TaskhelperError::catalog(format!("Invalid dashboard JSON: {e}")))?;
        let tasks = match role {
            Role::Requester => file.requester,
            Role::Helper => file.helper,
        };
        Ok(Self::new(role, tasks))
    }

    pub fn with_notifications(mut self, notifications: Notifications) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn active_view(&self) -> &str {
        self.views[self.active].name
    }

    /// Filters are kept per view across switches.
    pub fn switch_view(&mut self, name: &str) -> Result<(), TaskhelperError> {
        let index = self
            .views
            .iter()
            .position(|v| v.name == name)
            .ok_or_else(|| TaskhelperError::unknown_view(name, &self.role.views()))?;
        self.active = index;
        debug!(role = self.role.as_str(), view = name, "dashboard view switched");
        Ok(())
    }

    pub fn status_filter(&self) -> &str {
        &self.views[self.active].filter
    }

    pub fn filter_by_status(&mut self, key: impl Into<String>) {
        self.views[self.active].filter = key.into();
    }

    pub fn filtered_tasks(&self) -> Vec<&DashboardTask> {
        let view = &self.views[self.active];
        status::filter_by_status(&view.tasks, &view.filter, &self.mapping)
    }

    pub fn status_keys(&self) -> Vec<&str> {
        self.mapping.keys()
    }

    /// Delete a posting (requester) or withdraw an application (helper)
    /// from the active view. Returns `Ok(None)` when the user declines.
    pub fn remove_task(
        &mut self,
        id: u32,
        confirm: impl FnOnce() -> bool,
    ) -> Result<Option<DashboardTask>, TaskhelperError> {
        let view = &mut self.views[self.active];
        let index = view
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskhelperError::task_not_found(id))?;
        if !confirm() {
            return Ok(None);
        }
        let removed = view.tasks.remove(index);
        self.notifications.success(None, self.role.removal_message());
        Ok(Some(removed))
    }

    pub fn total_earnings(&self) -> u32 {
        self.all_tasks().filter_map(|t| t.earnings).sum()
    }

    /// Mean over rated entries, one decimal place. Zero when nothing is rated.
    pub fn average_rating(&self) -> f32 {
        let ratings: Vec<f32> = self.all_tasks().filter_map(|t| t.rating).collect();
        if ratings.is_empty() {
            return 0.0;
        }
        let mean = ratings.iter().sum::<f32>() / ratings.len() as f32;
        (mean * 10.0).round() / 10.0
    }

    fn all_tasks(&self) -> impl Iterator<Item = &DashboardTask> {
        self.views.iter().flat_map(|v| v.tasks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tasks: &[&DashboardTask]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_requester_filters_per_view() {
        let mut d = Dashboard::sample(Role::Requester).unwrap();
        assert_eq!(d.active_view(), "posted");
        assert_eq!(d.filtered_tasks().len(), 3);

        d.filter_by_status("recruiting");
        assert_eq!(ids(&d.filtered_tasks()), vec![1]);

        d.switch_view("completed").unwrap();
        assert_eq!(d.status_filter(), "all");
        d.filter_by_status("unrated");
        assert_eq!(ids(&d.filtered_tasks()), vec![5]);

        d.switch_view("posted").unwrap();
        assert_eq!(d.status_filter(), "recruiting");
        assert_eq!(ids(&d.filtered_tasks()), vec![1]);
    }

    #[test]
    fn test_helper_views_and_stats() {
        let mut d = Dashboard::sample(Role::Helper).unwrap();
        d.filter_by_status("in-progress");
        assert_eq!(ids(&d.filtered_tasks()), vec![5]);
        assert_eq!(d.total_earnings(), 7000);
        assert!((d.average_rating() - 4.9).abs() < f32::EPSILON);
        assert_eq!(d.role().status_label("rejected"), "Not selected");
        assert_eq!(d.role().status_label("mystery"), "Unknown");
    }

    #[test]
    fn test_unknown_view() {
        let mut d = Dashboard::sample(Role::Helper).unwrap();
        let err = d.switch_view("posted").unwrap_err();
        assert_eq!(err.code.as_str(), "UNKNOWN_VIEW");
        assert_eq!(d.active_view(), "applied");
    }

    #[test]
    fn test_remove_task_needs_confirmation() {
        let mut d = Dashboard::sample(Role::Helper).unwrap();
        assert!(d.remove_task(1, || false).unwrap().is_none());
        assert_eq!(d.filtered_tasks().len(), 3);
        let removed = d.remove_task(1, || true).unwrap().unwrap();
        assert_eq!(removed.title, "書類配達代行");
        assert_eq!(d.filtered_tasks().len(), 2);
        assert!(d.remove_task(1, || true).is_err());
    }

    #[test]
    fn test_empty_dashboard_stats() {
        let d = Dashboard::new(Role::Requester, BTreeMap::new());
        assert_eq!(d.average_rating(), 0.0);
        assert_eq!(d.total_earnings(), 0);
        assert!(d.filtered_tasks().is_empty());
    }
}
