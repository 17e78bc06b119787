use serde::{Deserialize, Serialize};

/// A task as seen from a requester's or helper's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTask {
    pub id: u32,
    pub title: String,
    pub status: String,
    pub category: String,
    pub price: u32,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings: Option<u32>,
    /// Relative label supplied with the mock data, e.g. `3日前`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
}
