pub mod rules;
pub mod images;
pub mod submission;
pub mod validator;

pub use rules::{Field, FormLimits};
pub use submission::{SubmissionState, SubmitOutcome, TaskCreator};
pub use validator::TaskForm;
