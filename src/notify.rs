//! User-facing notifications ("toasts").
//!
//! Components never talk to a concrete notifier. They hold a [`Notifications`]
//! handle whose notifier is optional; with no notifier attached every call is
//! a no-op. Display defaults live in one process-wide [`NotificationConfig`]
//! installed at startup with [`configure`].

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, RwLock};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub close_button: bool,
    pub newest_on_top: bool,
    pub progress_bar: bool,
    pub position: String,
    pub prevent_duplicates: bool,
    pub show_duration_ms: u64,
    pub hide_duration_ms: u64,
    pub timeout_ms: u64,
    pub extended_timeout_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            close_button: true,
            newest_on_top: true,
            progress_bar: true,
            position: "top-right".to_string(),
            prevent_duplicates: false,
            show_duration_ms: 300,
            hide_duration_ms: 1000,
            timeout_ms: 3000,
            extended_timeout_ms: 1000,
        }
    }
}

static CONFIG: OnceLock<RwLock<NotificationConfig>> = OnceLock::new();

fn config_slot() -> &'static RwLock<NotificationConfig> {
    CONFIG.get_or_init(|| RwLock::new(NotificationConfig::default()))
}

/// Replace the process-wide notification defaults.
pub fn configure(config: NotificationConfig) {
    match config_slot().write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Snapshot of the process-wide notification defaults.
pub fn current() -> NotificationConfig {
    match config_slot().read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Notification<'a> {
    pub level: Level,
    pub title: Option<&'a str>,
    pub message: &'a str,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification<'_>, config: &NotificationConfig);
}

/// Optional notifier capability handed to components.
#[derive(Clone, Default)]
pub struct Notifications {
    notifier: Option<Arc<dyn Notifier>>,
}

impl fmt::Debug for Notifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifications")
            .field("available", &self.is_available())
            .finish()
    }
}

impl Notifications {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier: Some(notifier),
        }
    }

    pub fn none() -> Self {
        Self { notifier: None }
    }

    pub fn is_available(&self) -> bool {
        self.notifier.is_some()
    }

    pub fn success(&self, title: Option<&str>, message: &str) {
        self.send(Level::Success, title, message);
    }

    pub fn info(&self, title: Option<&str>, message: &str) {
        self.send(Level::Info, title, message);
    }

    pub fn warning(&self, title: Option<&str>, message: &str) {
        self.send(Level::Warning, title, message);
    }

    pub fn error(&self, title: Option<&str>, message: &str) {
        self.send(Level::Error, title, message);
    }

    fn send(&self, level: Level, title: Option<&str>, message: &str) {
        let Some(ref notifier) = self.notifier else {
            return;
        };
        let notification = Notification {
            level,
            title,
            message,
        };
        notifier.notify(&notification, &current());
    }
}

/// Routes notifications into the log.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, n: &Notification<'_>, _config: &NotificationConfig) {
        let title = n.title.unwrap_or("");
        match n.level {
            Level::Success | Level::Info => {
                tracing::info!(kind = n.level.as_str(), title, "{}", n.message)
            }
            Level::Warning => tracing::warn!(title, "{}", n.message),
            Level::Error => tracing::error!(title, "{}", n.message),
        }
    }
}

/// Prints notifications to stderr, one line each.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    last: Mutex<Option<String>>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn render(n: &Notification<'_>) -> String {
        match n.title {
            Some(title) => format!("[{}] {}: {}", n.level.as_str(), title, n.message),
            None => format!("[{}] {}", n.level.as_str(), n.message),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, n: &Notification<'_>, config: &NotificationConfig) {
        let line = Self::render(n);
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if config.prevent_duplicates && last.as_deref() == Some(line.as_str()) {
            return;
        }
        eprintln!("{line}");
        *last = Some(line);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Collects every notification for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub seen: Mutex<Vec<(Level, String)>>,
    }

    impl RecordingNotifier {
        pub fn levels(&self) -> Vec<Level> {
            self.seen.lock().unwrap().iter().map(|(l, _)| *l).collect()
        }

        pub fn messages(&self) -> Vec<String> {
            self.seen.lock().unwrap().iter().map(|(_, m)| m.clone()).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, n: &Notification<'_>, _config: &NotificationConfig) {
            self.seen
                .lock()
                .unwrap()
                .push((n.level, n.message.to_string()));
        }
    }
}
