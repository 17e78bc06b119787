use serde::Serialize;

use crate::error::TaskhelperError;
use crate::models::{DraftTask, Task};

/// Idle → Submitting → Succeeded, or back to Idle on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
        }
    }
}

/// The create operation behind a submit. Supplied by the application.
pub trait TaskCreator {
    fn create_task(&mut self, draft: &DraftTask) -> Result<Task, TaskhelperError>;
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Not idle: a submission is running or already finished.
    Ignored,
    /// Validation failed; field errors are populated.
    Invalid,
    /// Now submitting; waiting for the create result.
    Started,
    Created(Task),
    Failed(TaskhelperError),
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
