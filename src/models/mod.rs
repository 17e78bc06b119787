pub mod task;
pub mod draft;
pub mod dashboard;
pub mod applicant;

pub use task::*;
pub use draft::*;
pub use dashboard::*;
pub use applicant::*;
