pub mod commands;
pub mod list;
pub mod create;
pub mod dashboard;
pub mod applicants;

pub use commands::*;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::TaskhelperError;
use crate::notify::{ConsoleNotifier, Notifications, TracingNotifier};
use crate::output;

/// Shared state for one CLI invocation.
pub struct Context {
    pub json: bool,
    pub config: Config,
    pub notifications: Notifications,
}

impl Context {
    /// Text mode shows notifications on stderr; JSON mode routes them to the log.
    pub fn new(json: bool, config: Config) -> Self {
        let notifications = if json {
            Notifications::new(Arc::new(TracingNotifier))
        } else {
            Notifications::new(Arc::new(ConsoleNotifier::new()))
        };
        Self {
            json,
            config,
            notifications,
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog, TaskhelperError> {
        match self.config.catalog_path {
            Some(ref path) => Catalog::load(path),
            None => Catalog::sample(),
        }
    }
}

/// Print `err` in the requested format and return the failure exit code.
pub fn fail(err: &TaskhelperError, json: bool) -> i32 {
    if json {
        output::json::print(&output::json::error(err));
    } else {
        eprintln!("Error: {}", err.message);
    }
    1
}
