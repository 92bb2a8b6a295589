//! Fixed-format date rendering for creative names

use chrono::{Datelike, NaiveDate};

/// Three-letter month abbreviations, indexed by month0
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Render a date as `Mmm.DD.YYYY`, e.g. `Jun.27.2025`.
///
/// The trafficking sheet format is fixed; locale-aware formatters must not
/// be substituted here.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{}.{:02}.{}",
        MONTHS[date.month0() as usize],
        date.day(),
        date.year()
    )
}
