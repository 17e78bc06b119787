//! Field rules for the task-creation draft. Each rule returns the
//! user-facing message on failure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{format_price, Category, DraftTask, PreferredTime};

pub const TITLE_MIN_CHARS: usize = 5;
pub const DESCRIPTION_MIN_CHARS: usize = 15;

/// Required fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Category,
    Title,
    Description,
    Location,
    Budget,
    PreferredDate,
    PreferredTime,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Self::Category,
        Self::Title,
        Self::Description,
        Self::Location,
        Self::Budget,
        Self::PreferredDate,
        Self::PreferredTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Title => "title",
            Self::Description => "description",
            Self::Location => "location",
            Self::Budget => "budget",
            Self::PreferredDate => "preferred_date",
            Self::PreferredTime => "preferred_time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLimits {
    pub budget_min: u32,
    pub budget_max: u32,
    pub max_images: usize,
    pub max_image_bytes: u64,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            budget_min: 500,
            budget_max: 50_000,
            max_images: 4,
            max_image_bytes: 10 * 1024 * 1024,
        }
    }
}

pub type RuleResult = Result<(), String>;

pub fn check_field(field: Field, draft: &DraftTask, limits: &FormLimits, today: NaiveDate) -> RuleResult {
    match field {
        Field::Category => check_category(&draft.category),
        Field::Title => check_title(&draft.title),
        Field::Description => check_description(&draft.description),
        Field::Location => check_location(&draft.location),
        Field::Budget => check_budget(&draft.budget, limits),
        Field::PreferredDate => check_preferred_date(&draft.preferred_date, today),
        Field::PreferredTime => check_preferred_time(&draft.preferred_time),
    }
}

pub fn check_category(raw: &str) -> RuleResult {
    if raw.trim().is_empty() {
        return Err("Please select a category.".into());
    }
    if Category::from_str(raw.trim()).is_none() {
        return Err("Please select one of the listed categories.".into());
    }
    Ok(())
}

pub fn check_title(raw: &str) -> RuleResult {
    let title = raw.trim();
    if title.is_empty() {
        return Err("Please enter a title.".into());
    }
    if title.chars().count() < TITLE_MIN_CHARS {
        return Err(format!("Title must be at least {TITLE_MIN_CHARS} characters."));
    }
    Ok(())
}

pub fn check_description(raw: &str) -> RuleResult {
    let description = raw.trim();
    if description.is_empty() {
        return Err("Please enter a description.".into());
    }
    if description.chars().count() < DESCRIPTION_MIN_CHARS {
        return Err(format!(
            "Description must be at least {DESCRIPTION_MIN_CHARS} characters."
        ));
    }
    Ok(())
}

pub fn check_location(raw: &str) -> RuleResult {
    if raw.trim().is_empty() {
        return Err("Please enter a location.".into());
    }
    Ok(())
}

/// Unparseable input is reported as missing.
pub fn check_budget(raw: &str, limits: &FormLimits) -> RuleResult {
    let Ok(budget) = raw.trim().parse::<i64>() else {
        return Err("Please enter a budget.".into());
    };
    if budget < i64::from(limits.budget_min) {
        return Err(format!(
            "Budget must be at least ¥{}.",
            format_price(limits.budget_min)
        ));
    }
    if budget > i64::from(limits.budget_max) {
        return Err(format!(
            "Budget must be ¥{} or less.",
            format_price(limits.budget_max)
        ));
    }
    Ok(())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Compared by calendar day, so any time today is still valid.
pub fn check_preferred_date(raw: &str, today: NaiveDate) -> RuleResult {
    let Some(date) = parse_date(raw) else {
        return Err("Please choose a preferred date.".into());
    };
    if date < today {
        return Err("Please choose today or a later date.".into());
    }
    Ok(())
}

pub fn check_preferred_time(raw: &str) -> RuleResult {
    if raw.trim().is_empty() {
        return Err("Please choose a preferred time.".into());
    }
    if PreferredTime::from_str(raw.trim()).is_none() {
        let slots: Vec<&str> = PreferredTime::ALL.iter().map(|t| t.as_str()).collect();
        return Err(format!("Please choose one of: {}.", slots.join(", ")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_title_length() {
        assert_eq!(
            check_title("ab").unwrap_err(),
            "Title must be at least 5 characters."
        );
        assert!(check_title("abcde").is_ok());
        assert!(check_title("   abcd   ").is_err());
        assert_eq!(check_title("   ").unwrap_err(), "Please enter a title.");
        assert!(check_title("買い物代行").is_ok());
    }

    #[test]
    fn test_description_length() {
        assert!(check_description("too short").is_err());
        assert!(check_description("fifteen chars!!").is_ok());
        assert_eq!(check_description("").unwrap_err(), "Please enter a description.");
    }

    #[test]
    fn test_budget_bounds() {
        let limits = FormLimits::default();
        assert_eq!(
            check_budget("499", &limits).unwrap_err(),
            "Budget must be at least ¥500."
        );
        assert!(check_budget("500", &limits).is_ok());
        assert!(check_budget("50000", &limits).is_ok());
        assert_eq!(
            check_budget("50001", &limits).unwrap_err(),
            "Budget must be ¥50,000 or less."
        );
        assert_eq!(check_budget("", &limits).unwrap_err(), "Please enter a budget.");
        assert_eq!(check_budget("abc", &limits).unwrap_err(), "Please enter a budget.");
        assert!(check_budget("-5", &limits).is_err());
    }

    #[test]
    fn test_date_against_today() {
        assert!(check_preferred_date("2026-10-17", today()).is_err());
        assert!(check_preferred_date("2026-10-18", today()).is_ok());
        assert!(check_preferred_date("2027-01-01", today()).is_ok());
        assert_eq!(
            check_preferred_date("tomorrow", today()).unwrap_err(),
            "Please choose a preferred date."
        );
    }

    #[test]
    fn test_enumerated_fields() {
        assert!(check_category("delivery").is_ok());
        assert!(check_category("").is_err());
        assert!(check_category("gardening").is_err());
        assert!(check_preferred_time("evening").is_ok());
        assert_eq!(
            check_preferred_time("midnight").unwrap_err(),
            "Please choose one of: morning, afternoon, evening, anytime."
        );
        assert!(check_location("  渋谷区  ").is_ok());
        assert!(check_location("  ").is_err());
    }
}
