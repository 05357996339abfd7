/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Placeholder for empty table cells
pub const EMPTY_CELL: &str = "—";

/// Format timestamp to DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Same as [`format_datetime`], with a dash for missing values
pub fn format_optional_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(format_datetime)
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}
