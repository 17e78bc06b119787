//! Per-axis inclusion tests. A task is in the view iff every predicate holds.

use crate::models::Task;

use super::state::{FilterState, PriceBucket, QuickFilter, SearchScope, TimeBucket};

pub const HIGH_PAY_THRESHOLD: u32 = 5000;

const URGENT_TAG_MARKERS: &[&str] = &["緊急", "急募", "urgent"];
const TODAY_DEADLINE_MARKERS: &[&str] = &["今日", "本日", "today"];

fn time_markers(bucket: TimeBucket) -> &'static [&'static str] {
    match bucket {
        TimeBucket::Today => &["今日", "today"],
        TimeBucket::Tomorrow => &["明日", "tomorrow"],
        TimeBucket::ThisWeek => &["今週", "週末", "this week", "weekend"],
        TimeBucket::Flexible => &["相談", "都合", "flexible", "negotiable"],
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|n| haystack.contains(n))
}

pub fn matches(task: &Task, state: &FilterState) -> bool {
    matches_category(task, state)
        && matches_search(task, &state.search_term, state.search_scope)
        && matches_quick_filter(task, state.quick_filter)
        && matches_location(task, state.location.as_deref())
        && matches_price(task, state.price_bucket)
        && matches_time(task, state.time_bucket)
}

pub fn matches_category(task: &Task, state: &FilterState) -> bool {
    state.category.map_or(true, |c| task.category == c)
}

/// Case-insensitive substring match. An empty term always passes.
pub fn matches_search(task: &Task, term: &str, scope: SearchScope) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&term);
    match scope {
        SearchScope::Title => hit(&task.title),
        SearchScope::Description => hit(&task.description),
        SearchScope::Tags => task.tags.iter().any(|tag| hit(tag)),
        SearchScope::Location => hit(&task.location_name),
        SearchScope::All => {
            let all = format!(
                "{} {} {} {}",
                task.title,
                task.description,
                task.location_name,
                task.tags.join(" ")
            );
            hit(&all)
        }
    }
}

pub fn matches_quick_filter(task: &Task, quick: Option<QuickFilter>) -> bool {
    match quick {
        None => true,
        Some(QuickFilter::Urgent) => task
            .tags
            .iter()
            .any(|tag| contains_any(tag, URGENT_TAG_MARKERS)),
        Some(QuickFilter::Today) => contains_any(&task.deadline, TODAY_DEADLINE_MARKERS),
        Some(QuickFilter::HighPay) => task.price_value() >= HIGH_PAY_THRESHOLD,
    }
}

pub fn matches_location(task: &Task, location: Option<&str>) -> bool {
    location.map_or(true, |l| task.location == l)
}

pub fn matches_price(task: &Task, bucket: Option<PriceBucket>) -> bool {
    bucket.map_or(true, |b| b.contains(task.price_value()))
}

pub fn matches_time(task: &Task, bucket: Option<TimeBucket>) -> bool {
    bucket.map_or(true, |b| contains_any(&task.deadline, time_markers(b)))
}
