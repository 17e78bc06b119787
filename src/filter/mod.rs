pub mod state;
pub mod predicates;
pub mod engine;
pub mod status;

pub use engine::{apply, TaskList};
pub use state::*;
