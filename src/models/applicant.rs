use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: u32,
    pub name: String,
    pub rating: f32,
    pub review_count: u32,
    pub completed_tasks: u32,
    /// e.g. `1.2km`
    pub distance: String,
    pub applied_at: NaiveDateTime,
    pub is_online: bool,
    pub is_verified: bool,
    pub message: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Percentage, 0-100.
    pub completion_rate: u32,
}

impl Applicant {
    /// Distance in kilometres. Unparseable distances sort last.
    pub fn distance_km(&self) -> f64 {
        self.distance
            .trim()
            .trim_end_matches("km")
            .trim()
            .parse()
            .unwrap_or(f64::INFINITY)
    }
}
