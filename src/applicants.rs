use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::sample;
use crate::error::TaskhelperError;
use crate::models::Applicant;
use crate::notify::Notifications;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicantSort {
    #[default]
    Rating,
    Experience,
    Distance,
    Applied,
}

impl ApplicantSort {
    pub const NAMES: [&'static str; 4] = ["rating", "experience", "distance", "applied"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Experience => "experience",
            Self::Distance => "distance",
            Self::Applied => "applied",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "rating" => Some(Self::Rating),
            "experience" => Some(Self::Experience),
            "distance" => Some(Self::Distance),
            "applied" => Some(Self::Applied),
            _ => None,
        }
    }

    fn compare(&self, a: &Applicant, b: &Applicant) -> Ordering {
        match self {
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Experience => b.completed_tasks.cmp(&a.completed_tasks),
            Self::Distance => a.distance_km().total_cmp(&b.distance_km()),
            Self::Applied => a.applied_at.cmp(&b.applied_at),
        }
    }
}

/// The posting whose applicants are being reviewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedTask {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub date: String,
    pub time_slot: String,
    pub location: String,
    pub price: u32,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct ApplicantsFile {
    task: PostedTask,
    applicants: Vec<Applicant>,
}

#[derive(Debug, Clone)]
pub struct ApplicantBoard {
    task: PostedTask,
    applicants: Vec<Applicant>,
    sort: ApplicantSort,
    selected: Option<u32>,
    notifications: Notifications,
}

impl ApplicantBoard {
    pub fn new(task: PostedTask, applicants: Vec<Applicant>) -> Self {
        Self {
            task,
            applicants,
            sort: ApplicantSort::default(),
            selected: None,
            notifications: Notifications::none(),
        }
    }

    pub fn sample() -> Result<Self, TaskhelperError> {
        let file: ApplicantsFile = serde_json::from_str(sample::APPLICANTS_JSON)
            .map_err(|e| TaskhelperError::catalog(format!("Invalid applicants JSON: {e}")))?;
        Ok(Self::new(file.task, file.applicants))
    }

    pub fn with_notifications(mut self, notifications: Notifications) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn task(&self) -> &PostedTask {
        &self.task
    }

    pub fn sort(&self) -> ApplicantSort {
        self.sort
    }

    pub fn set_sort(&mut self, sort: ApplicantSort) {
        self.sort = sort;
    }

    pub fn sorted(&self) -> Vec<&Applicant> {
        let mut sorted: Vec<&Applicant> = self.applicants.iter().collect();
        sorted.sort_by(|a, b| self.sort.compare(a, b));
        sorted
    }

    pub fn average_rating(&self) -> f32 {
        if self.applicants.is_empty() {
            return 0.0;
        }
        self.applicants.iter().map(|a| a.rating).sum::<f32>() / self.applicants.len() as f32
    }

    pub fn average_completion_rate(&self) -> u32 {
        if self.applicants.is_empty() {
            return 0;
        }
        let sum: u32 = self.applicants.iter().map(|a| a.completion_rate).sum();
        (f64::from(sum) / self.applicants.len() as f64).round() as u32
    }

    pub fn selected(&self) -> Option<&Applicant> {
        self.selected
            .and_then(|id| self.applicants.iter().find(|a| a.id == id))
    }

    /// Choose the helper for this posting. Only one selection is allowed.
    pub fn select_helper(&mut self, id: u32) -> Result<&Applicant, TaskhelperError> {
        if let Some(current) = self.selected() {
            return Err(TaskhelperError::helper_already_selected(&current.name));
        }
        let applicant = self
            .applicants
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| TaskhelperError::applicant_not_found(id))?;
        self.selected = Some(id);
        info!(task = self.task.id, applicant = id, "helper selected");
        self.notifications
            .success(Some("Selected"), &format!("{} was selected.", applicant.name));
        Ok(applicant)
    }
}
