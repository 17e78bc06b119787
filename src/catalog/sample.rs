//! Built-in mock data.

pub const TASKS_JSON: &str = include_str!("sample/tasks.json");
pub const DASHBOARD_JSON: &str = include_str!("sample/dashboard.json");
pub const APPLICANTS_JSON: &str = include_str!("sample/applicants.json");
