//! Status-bucket filtering shared by every dashboard view.
//!
//! A view passes a filter key (`all`, `recruiting`, `pending-payment`, ...)
//! and a [`StatusMapping`] table translating keys into record statuses.
//! Keys missing from the table map to themselves.

use std::collections::HashMap;

use crate::models::DashboardTask;

pub const ALL: &str = "all";

pub trait HasStatus {
    fn status(&self) -> &str;
}

impl HasStatus for DashboardTask {
    fn status(&self) -> &str {
        &self.status
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusMapping {
    table: HashMap<String, String>,
}

impl StatusMapping {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            table: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.table.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

pub fn filter_by_status<'a, T: HasStatus>(
    items: &'a [T],
    key: &str,
    mapping: &StatusMapping,
) -> Vec<&'a T> {
    if key == ALL {
        return items.iter().collect();
    }
    let wanted = mapping.resolve(key);
    items.iter().filter(|i| i.status() == wanted).collect()
}
