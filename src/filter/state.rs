use serde::Serialize;

use crate::error::TaskhelperError;
use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    Title,
    Description,
    Tags,
    Location,
}

impl SearchScope {
    pub const NAMES: [&'static str; 5] = ["all", "title", "description", "tags", "location"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Title => "title",
            Self::Description => "description",
            Self::Tags => "tags",
            Self::Location => "location",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "tags" => Some(Self::Tags),
            "location" => Some(Self::Location),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuickFilter {
    #[serde(rename = "urgent")]
    Urgent,
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "high-pay")]
    HighPay,
}

impl QuickFilter {
    pub const NAMES: [&'static str; 3] = ["urgent", "today", "high-pay"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Today => "today",
            Self::HighPay => "high-pay",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "urgent" => Some(Self::Urgent),
            "today" => Some(Self::Today),
            "high-pay" => Some(Self::HighPay),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceBucket {
    #[serde(rename = "0-2000")]
    UpTo2000,
    #[serde(rename = "2000-5000")]
    From2000To5000,
    #[serde(rename = "5000-10000")]
    From5000To10000,
    #[serde(rename = "10000+")]
    Over10000,
}

impl PriceBucket {
    pub const NAMES: [&'static str; 4] = ["0-2000", "2000-5000", "5000-10000", "10000+"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo2000 => "0-2000",
            Self::From2000To5000 => "2000-5000",
            Self::From5000To10000 => "5000-10000",
            Self::Over10000 => "10000+",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "0-2000" => Some(Self::UpTo2000),
            "2000-5000" => Some(Self::From2000To5000),
            "5000-10000" => Some(Self::From5000To10000),
            "10000+" => Some(Self::Over10000),
            _ => None,
        }
    }

    /// Bucket edges are inclusive on both ends, so 2000, 5000 and 10000
    /// each belong to two buckets.
    pub fn contains(&self, price: u32) -> bool {
        match self {
            Self::UpTo2000 => price <= 2000,
            Self::From2000To5000 => (2000..=5000).contains(&price),
            Self::From5000To10000 => (5000..=10000).contains(&price),
            Self::Over10000 => price >= 10000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeBucket {
    Today,
    Tomorrow,
    ThisWeek,
    Flexible,
}

impl TimeBucket {
    pub const NAMES: [&'static str; 4] = ["today", "tomorrow", "this-week", "flexible"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::ThisWeek => "this-week",
            Self::Flexible => "flexible",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "today" => Some(Self::Today),
            "tomorrow" => Some(Self::Tomorrow),
            "this-week" => Some(Self::ThisWeek),
            "flexible" => Some(Self::Flexible),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Newest,
    PriceHigh,
    PriceLow,
    Distance,
}

impl SortOrder {
    pub const NAMES: [&'static str; 4] = ["newest", "price-high", "price-low", "distance"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceHigh => "price-high",
            Self::PriceLow => "price-low",
            Self::Distance => "distance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(Self::Newest),
            "price-high" => Some(Self::PriceHigh),
            "price-low" => Some(Self::PriceLow),
            "distance" => Some(Self::Distance),
            _ => None,
        }
    }
}

/// One value per axis. `None` (or an empty search term) means the axis
/// imposes no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    pub search_term: String,
    pub search_scope: SearchScope,
    pub quick_filter: Option<QuickFilter>,
    /// `None` is "all".
    pub category: Option<Category>,
    pub location: Option<String>,
    pub price_bucket: Option<PriceBucket>,
    pub time_bucket: Option<TimeBucket>,
    pub sort_order: SortOrder,
}

impl FilterState {
    /// True when any non-search axis differs from its default. The search
    /// axes have their own clear affordance.
    pub fn has_active_filters(&self) -> bool {
        self.category.is_some()
            || self.location.is_some()
            || self.price_bucket.is_some()
            || self.time_bucket.is_some()
            || self.sort_order != SortOrder::Newest
    }

    /// Reset the search term, search scope and quick filter only.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.search_scope = SearchScope::All;
        self.quick_filter = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Selecting the active quick filter again switches it off.
    pub fn toggle_quick_filter(&mut self, quick: QuickFilter) {
        if self.quick_filter == Some(quick) {
            self.quick_filter = None;
        } else {
            self.quick_filter = Some(quick);
        }
    }
}

/// Parse helpers shared by the CLI. Empty strings and `all` map to "no
/// constraint" where the axis allows it.
pub fn parse_category(value: &str) -> Result<Option<Category>, TaskhelperError> {
    if value.is_empty() || value == "all" {
        return Ok(None);
    }
    Category::from_str(value).map(Some).ok_or_else(|| {
        let mut allowed = vec!["all"];
        allowed.extend(Category::names());
        TaskhelperError::invalid_filter("category", value, &allowed)
    })
}

pub fn parse_search_scope(value: &str) -> Result<SearchScope, TaskhelperError> {
    SearchScope::from_str(value)
        .ok_or_else(|| TaskhelperError::invalid_filter("search scope", value, &SearchScope::NAMES))
}

pub fn parse_quick_filter(value: &str) -> Result<Option<QuickFilter>, TaskhelperError> {
    if value.is_empty() {
        return Ok(None);
    }
    QuickFilter::from_str(value)
        .map(Some)
        .ok_or_else(|| TaskhelperError::invalid_filter("quick filter", value, &QuickFilter::NAMES))
}

pub fn parse_price_bucket(value: &str) -> Result<Option<PriceBucket>, TaskhelperError> {
    if value.is_empty() {
        return Ok(None);
    }
    PriceBucket::from_str(value)
        .map(Some)
        .ok_or_else(|| TaskhelperError::invalid_filter("price range", value, &PriceBucket::NAMES))
}

pub fn parse_time_bucket(value: &str) -> Result<Option<TimeBucket>, TaskhelperError> {
    if value.is_empty() {
        return Ok(None);
    }
    TimeBucket::from_str(value)
        .map(Some)
        .ok_or_else(|| TaskhelperError::invalid_filter("time filter", value, &TimeBucket::NAMES))
}

pub fn parse_sort_order(value: &str) -> Result<SortOrder, TaskhelperError> {
    SortOrder::from_str(value)
        .ok_or_else(|| TaskhelperError::invalid_filter("sort order", value, &SortOrder::NAMES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_no_active_filters() {
        let state = FilterState::default();
        assert!(!state.has_active_filters());
        assert_eq!(state.sort_order, SortOrder::Newest);
        assert_eq!(state.search_scope, SearchScope::All);
    }

    #[test]
    fn test_each_axis_activates_filters() {
        let variants = [
            FilterState { category: Some(Category::Cleaning), ..Default::default() },
            FilterState { location: Some("minato".into()), ..Default::default() },
            FilterState { price_bucket: Some(PriceBucket::Over10000), ..Default::default() },
            FilterState { time_bucket: Some(TimeBucket::Flexible), ..Default::default() },
            FilterState { sort_order: SortOrder::PriceLow, ..Default::default() },
        ];
        for state in variants {
            assert!(state.has_active_filters(), "{state:?}");
        }
    }

    #[test]
    fn test_clear_search_keeps_other_axes() {
        let mut state = FilterState {
            search_term: "犬".into(),
            search_scope: SearchScope::Title,
            quick_filter: Some(QuickFilter::Urgent),
            category: Some(Category::Petcare),
            location: Some("shibuya".into()),
            price_bucket: Some(PriceBucket::UpTo2000),
            time_bucket: Some(TimeBucket::Tomorrow),
            sort_order: SortOrder::PriceHigh,
        };
        state.clear_search();
        assert_eq!(state.search_term, "");
        assert_eq!(state.search_scope, SearchScope::All);
        assert_eq!(state.quick_filter, None);
        assert_eq!(state.category, Some(Category::Petcare));
        assert_eq!(state.location.as_deref(), Some("shibuya"));
        assert_eq!(state.price_bucket, Some(PriceBucket::UpTo2000));
        assert_eq!(state.time_bucket, Some(TimeBucket::Tomorrow));
        assert_eq!(state.sort_order, SortOrder::PriceHigh);

        state.clear_all();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_toggle_quick_filter() {
        let mut state = FilterState::default();
        state.toggle_quick_filter(QuickFilter::Today);
        assert_eq!(state.quick_filter, Some(QuickFilter::Today));
        state.toggle_quick_filter(QuickFilter::HighPay);
        assert_eq!(state.quick_filter, Some(QuickFilter::HighPay));
        state.toggle_quick_filter(QuickFilter::HighPay);
        assert_eq!(state.quick_filter, None);
    }

    #[test]
    fn test_price_bucket_edges_inclusive() {
        assert!(PriceBucket::UpTo2000.contains(2000));
        assert!(PriceBucket::From2000To5000.contains(2000));
        assert!(PriceBucket::From2000To5000.contains(5000));
        assert!(PriceBucket::From5000To10000.contains(5000));
        assert!(PriceBucket::From5000To10000.contains(10000));
        assert!(PriceBucket::Over10000.contains(10000));
        assert!(!PriceBucket::UpTo2000.contains(2001));
        assert!(!PriceBucket::Over10000.contains(9999));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_category("all").unwrap(), None);
        assert_eq!(parse_category("").unwrap(), None);
        assert_eq!(parse_category("repair").unwrap(), Some(Category::Repair));
        let err = parse_category("gardening").unwrap_err();
        assert_eq!(err.code.as_str(), "INVALID_FILTER");
        assert!(err.message.contains("shopping"));

        assert_eq!(parse_price_bucket("10000+").unwrap(), Some(PriceBucket::Over10000));
        assert!(parse_price_bucket("1-2").is_err());
        assert_eq!(parse_sort_order("price-low").unwrap(), SortOrder::PriceLow);
        assert!(parse_sort_order("oldest").is_err());
        assert_eq!(parse_quick_filter("").unwrap(), None);
        assert_eq!(parse_time_bucket("this-week").unwrap(), Some(TimeBucket::ThisWeek));
        assert_eq!(parse_search_scope("tags").unwrap(), SearchScope::Tags);
    }
}
