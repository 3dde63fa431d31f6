// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Utc};

/// Format a timestamp as "<Month> <day>" for workout descriptions,
/// e.g. "August 23".
pub fn format_month_day(date: DateTime<Utc>) -> String {
    format!("{} {}", date.format("%B"), date.day())
}
