use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{Category, Task};

use super::predicates;
use super::state::{FilterState, PriceBucket, QuickFilter, SearchScope, SortOrder, TimeBucket};

/// Filter then sort. Same tasks and state always give the same sequence.
///
/// `Distance` has no distance data behind it and keeps catalog order.
pub fn apply<'a>(tasks: &'a [Task], state: &FilterState) -> Vec<&'a Task> {
    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|t| predicates::matches(t, state))
        .collect();
    sort(&mut view, state.sort_order);
    view
}

pub fn sort(view: &mut [&Task], order: SortOrder) {
    match order {
        SortOrder::Newest => view.sort_by(|a, b| newest_first(a, b)),
        SortOrder::PriceLow => view.sort_by(|a, b| cheapest_first(a, b)),
        SortOrder::PriceHigh => view.sort_by(|a, b| cheapest_first(b, a)),
        SortOrder::Distance => {}
    }
}

fn newest_first(a: &Task, b: &Task) -> Ordering {
    b.posted_at.cmp(&a.posted_at).then(b.id.cmp(&a.id))
}

// Ties break on id so the two price orders are exact reverses.
fn cheapest_first(a: &Task, b: &Task) -> Ordering {
    a.price_value()
        .cmp(&b.price_value())
        .then(a.id.cmp(&b.id))
}

/// The task-list page: a catalog, its filter state and the derived view.
/// Every setter recomputes the view.
#[derive(Debug, Clone)]
pub struct TaskList {
    catalog: Catalog,
    state: FilterState,
    view: Vec<u32>,
}

impl TaskList {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_state(catalog, FilterState::default())
    }

    pub fn with_state(catalog: Catalog, state: FilterState) -> Self {
        let mut list = Self {
            catalog,
            state,
            view: Vec::new(),
        };
        list.refresh();
        list
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.view
            .iter()
            .filter_map(|id| self.catalog.get(*id).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.refresh();
    }

    pub fn set_search_scope(&mut self, scope: SearchScope) {
        self.state.search_scope = scope;
        self.refresh();
    }

    pub fn quick_search(&mut self, quick: QuickFilter) {
        self.state.toggle_quick_filter(quick);
        self.refresh();
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        self.state.category = category;
        self.refresh();
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.state.location = location.filter(|l| !l.is_empty());
        self.refresh();
    }

    pub fn set_price_bucket(&mut self, bucket: Option<PriceBucket>) {
        self.state.price_bucket = bucket;
        self.refresh();
    }

    pub fn set_time_bucket(&mut self, bucket: Option<TimeBucket>) {
        self.state.time_bucket = bucket;
        self.refresh();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.state.sort_order = order;
        self.refresh();
    }

    pub fn clear_search(&mut self) {
        self.state.clear_search();
        self.refresh();
    }

    pub fn clear_all_filters(&mut self) {
        self.state.clear_all();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view = apply(self.catalog.tasks(), &self.state)
            .into_iter()
            .map(|t| t.id)
            .collect();
        debug!(
            visible = self.view.len(),
            total = self.catalog.len(),
            sort = self.state.sort_order.as_str(),
            "task list recomputed"
        );
    }
}
