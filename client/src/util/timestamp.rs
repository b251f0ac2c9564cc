//! Refresh timestamp shown in the dashboard hero.
//!
//! The human-readable form follows the `en` medium-date / short-time style
//! (`Oct 18, 2026, 3:04 PM`). The machine-readable form is RFC 3339 and feeds
//! the `datetime` attribute of the `<time>` element.
//!
//! TRADE-OFFS
//! ==========
//! Formatting never aborts a render. Each form degrades to the next one
//! (medium/short, then RFC 3339, then the `Display` form) and logs a warning.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::formatting::Formattable;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const MEDIUM_SHORT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]"
);

/// A point in time formatted once and then held unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTimestamp {
    display: String,
    machine: String,
}

impl RefreshTimestamp {
    /// Read the wall clock and format it in the given offset.
    #[must_use]
    pub fn capture(offset: UtcOffset) -> Self {
        Self::from_datetime(OffsetDateTime::now_utc().to_offset(offset))
    }

    #[must_use]
    pub fn from_datetime(at: OffsetDateTime) -> Self {
        let machine = format_or_warn(at, &Rfc3339, "rfc3339").unwrap_or_else(|| at.to_string());
        let display = format_or_warn(at, MEDIUM_SHORT, "medium/short").unwrap_or_else(|| machine.clone());
        Self { display, machine }
    }

    /// Text shown to the reader.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Value for the `datetime` attribute.
    #[must_use]
    pub fn machine(&self) -> &str {
        &self.machine
    }
}

fn format_or_warn<F>(at: OffsetDateTime, format: &F, style: &str) -> Option<String>
where
    F: Formattable + ?Sized,
{
    match at.format(format) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("refresh timestamp {style} formatting failed: {e}");
            None
        }
    }
}

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod tests;
