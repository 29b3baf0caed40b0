//! Due-date types.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Color coding of a row's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStyle {
    /// Neutral: far away, no date, or task completed.
    Muted,
    /// Due soon.
    Warning,
    /// Overdue.
    Danger,
}

impl DueStyle {
    /// Returns the text class for this style.
    pub fn css_class(&self) -> &'static str {
        match self {
            DueStyle::Muted => "text-muted",
            DueStyle::Warning => "text-warning",
            DueStyle::Danger => "text-danger",
        }
    }
}

/// The due-date display element of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDisplay {
    /// Text shown to the user.
    pub text: String,
    /// Current color coding, if any class is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<DueStyle>,
}

impl DueDisplay {
    /// Creates a display with no style applied yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }
}

/// Parses a `data-due-date` attribute value.
///
/// Accepts plain dates (`2026-03-01`), RFC 3339 date-times and naive
/// date-times. The time component is discarded. Empty or unparseable values
/// yield `None`.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .map(|dt| dt.date())
        .ok()
}

/// Deserializes an optional due date through `parse_due_date`.
///
/// Missing, null and empty values are `None`; anything else must parse.
pub fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_due_date(&raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid due date: {:?}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_due_date("2026-03-01"), Some(date(2026, 3, 1)));
        assert_eq!(parse_due_date("  2026-03-01 "), Some(date(2026, 3, 1)));
    }

    #[test]
    fn test_parse_datetime_drops_time() {
        assert_eq!(
            parse_due_date("2026-03-01T23:59:00+02:00"),
            Some(date(2026, 3, 1))
        );
        assert_eq!(parse_due_date("2026-03-01T08:30:00"), Some(date(2026, 3, 1)));
        assert_eq!(parse_due_date("2026-03-01 08:30:00"), Some(date(2026, 3, 1)));
    }

    #[test]
    fn test_parse_empty_or_invalid() {
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("   "), None);
        assert_eq!(parse_due_date("None"), None);
        assert_eq!(parse_due_date("2026-13-40"), None);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(DueStyle::Muted.css_class(), "text-muted");
        assert_eq!(DueStyle::Warning.css_class(), "text-warning");
        assert_eq!(DueStyle::Danger.css_class(), "text-danger");
    }
}
