// src/types.rs

//! Small value types shared by the config layer and the scheduler.

use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer};

/// Date-time layouts accepted for due dates, tried in order after RFC 3339.
///
/// `%.f` also matches a missing fraction.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts; these resolve to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// A due date that parsed successfully.
///
/// Due dates arrive as free-form strings. Anything that does not parse is
/// treated as "no due date" by callers, so there is no error type here:
/// [`DueDate::parse`] simply returns `None`.
///
/// Offset timestamps (`2024-01-01T10:00:00+02:00`) are normalised to UTC
/// before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDateTime);

impl DueDate {
    /// Parse a due date string, returning `None` when it is not a date.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.naive_utc()));
        }

        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self(dt));
            }
        }

        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
    }

    /// Convenience for the common `Option<String>` field shape.
    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.num_seconds_from_midnight() == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%d"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
        }
    }
}

/// Order two optional due dates: earlier first, missing dates last.
///
/// `Option`'s own `Ord` puts `None` first, which is the opposite of what the
/// scheduler needs.
pub fn compare_due(a: Option<DueDate>, b: Option<DueDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Format of a plan file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `[config]` + `[task.<title>]` tables.
    Toml,
    /// A schedule request body: `{"tasks": [...]}`.
    Json,
}

impl InputFormat {
    /// Pick a format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Toml,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "toml" => Ok(InputFormat::Toml),
            "json" => Ok(InputFormat::Json),
            other => Err(format!(
                "invalid input format: {other} (expected \"toml\" or \"json\")"
            )),
        }
    }
}

/// Deserialize a list that may be given as `null`, treating it as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due(s: &str) -> DueDate {
        DueDate::parse(s).unwrap_or_else(|| panic!("expected {s:?} to parse"))
    }

    #[test]
    fn parses_common_layouts() {
        assert_eq!(due("2024-01-05").to_string(), "2024-01-05");
        assert_eq!(due("2024/01/05"), due("2024-01-05"));
        assert_eq!(due("01/05/2024"), due("2024-01-05"));
        assert_eq!(due("  2024-01-05 "), due("2024-01-05"));
        assert_eq!(due("2024-01-05T10:30:00").to_string(), "2024-01-05T10:30:00");
        assert_eq!(due("2024-01-05 10:30"), due("2024-01-05T10:30:00"));
    }

    #[test]
    fn naive_timestamps_keep_fractional_seconds() {
        let whole = due("2024-01-05T10:30:00");
        let fraction = due("2024-01-05T10:30:00.1234567");

        assert!(fraction > whole);
        assert!(fraction < due("2024-01-05T10:30:01"));
        assert_eq!(due("2024-01-05 10:30:00.5"), due("2024-01-05T10:30:00.5"));
        assert_eq!(due("2024-01-05T10:30:00.123Z"), due("2024-01-05T10:30:00.123"));
    }

    #[test]
    fn rfc3339_is_normalised_to_utc() {
        assert_eq!(due("2024-01-05T12:00:00+02:00"), due("2024-01-05T10:00:00"));
        assert_eq!(due("2024-01-05T10:00:00Z"), due("2024-01-05T10:00:00"));
    }

    #[test]
    fn garbage_is_not_a_date() {
        for raw in ["", "   ", "tomorrow", "2024-13-01", "2024-02-30", "N/A"] {
            assert_eq!(DueDate::parse(raw), None, "{raw:?} should not parse");
        }
        assert_eq!(DueDate::from_optional(None), None);
    }

    #[test]
    fn missing_dates_sort_last() {
        let early = Some(due("2024-01-01"));
        let late = Some(due("2024-01-05"));

        assert_eq!(compare_due(early, late), Ordering::Less);
        assert_eq!(compare_due(late, early), Ordering::Greater);
        assert_eq!(compare_due(late, None), Ordering::Less);
        assert_eq!(compare_due(None, early), Ordering::Greater);
        assert_eq!(compare_due(None, None), Ordering::Equal);
    }

    #[test]
    fn input_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("plan.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("plan.JSON")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("Taskdag.toml")), InputFormat::Toml);
        assert_eq!(InputFormat::from_path(Path::new("plan")), InputFormat::Toml);
        assert_eq!("Json".parse::<InputFormat>(), Ok(InputFormat::Json));
        assert!("yaml".parse::<InputFormat>().is_err());
    }
}
