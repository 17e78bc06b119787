use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shopping,
    Cleaning,
    Delivery,
    Petcare,
    Repair,
    Others,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Shopping,
        Self::Cleaning,
        Self::Delivery,
        Self::Petcare,
        Self::Repair,
        Self::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shopping => "shopping",
            Self::Cleaning => "cleaning",
            Self::Delivery => "delivery",
            Self::Petcare => "petcare",
            Self::Repair => "repair",
            Self::Others => "others",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "shopping" => Some(Self::Shopping),
            "cleaning" => Some(Self::Cleaning),
            "delivery" => Some(Self::Delivery),
            "petcare" => Some(Self::Petcare),
            // dashboards historically used the plural form
            "repair" | "repairs" => Some(Self::Repair),
            "others" => Some(Self::Others),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Shopping => "Shopping",
            Self::Cleaning => "Cleaning",
            Self::Delivery => "Delivery",
            Self::Petcare => "Pet care",
            Self::Repair => "Repair",
            Self::Others => "Others",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

/// One entry of the task catalog. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub category: Category,
    /// Location code, e.g. `shibuya`.
    pub location: String,
    pub location_name: String,
    /// Currency-formatted price, e.g. `3,000` or `¥3,000`.
    pub price: String,
    pub posted_at: NaiveDateTime,
    /// Free text, e.g. `明日 午前中`. Not a structured date.
    pub deadline: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: String,
}

impl Task {
    /// Parsed price. Malformed prices count as zero.
    pub fn price_value(&self) -> u32 {
        parse_price(&self.price).unwrap_or(0)
    }
}

/// Strip currency symbols, separators and whitespace, then parse.
pub fn parse_price(raw: &str) -> Option<u32> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '¥' | '￥' | ',' | '，') && !c.is_whitespace())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Render an integer amount with thousands separators: `12000` → `12,000`.
pub fn format_price(value: u32) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_strips_symbols() {
        assert_eq!(parse_price("3,000"), Some(3000));
        assert_eq!(parse_price("¥12,500"), Some(12500));
        assert_eq!(parse_price(" ￥500 "), Some(500));
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1000), "1,000");
        assert_eq!(format_price(50000), "50,000");
        assert_eq!(format_price(1234567), "1,234,567");
    }

    #[test]
    fn test_category_round_trip_names() {
        for c in Category::ALL {
            assert_eq!(Category::from_str(c.as_str()), Some(c));
        }
        assert_eq!(Category::from_str("repairs"), Some(Category::Repair));
        assert_eq!(Category::from_str("all"), None);
    }
}
