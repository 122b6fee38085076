use time::{Date, Duration, OffsetDateTime, macros::format_description};

use crate::{Error, Result};

/// Parse a calendar date written strictly as `YYYY-MM-DD`.
///
/// Anything else (missing zero padding, other separators, trailing text,
/// out of range month or day) is a [`Error::DateFormat`] carrying the
/// input unchanged.
pub fn parse_date(text: &str) -> Result<Date> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(Error::DateFormat(text.to_owned()));
    }

    let format = format_description!("[year]-[month]-[day]");
    Date::parse(text, &format).map_err(|_| Error::DateFormat(text.to_owned()))
}

/// `date + days`, saturating at the calendar bounds.
pub fn add_days(date: Date, days: u32) -> Date {
    date.checked_add(Duration::days(days.into()))
        .unwrap_or(Date::MAX)
}

/// Source of "today" for date relative queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Local calendar date, or UTC when the local offset is unknown.
    #[default]
    System,
    Fixed(Date),
}

impl Clock {
    pub fn today(&self) -> Date {
        match self {
            Clock::System => OffsetDateTime::now_local()
                .unwrap_or_else(|_| OffsetDateTime::now_utc())
                .date(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2025-11-01").unwrap(), date!(2025 - 11 - 01));
        assert_eq!(parse_date("2024-02-29").unwrap(), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_parse_date_rejects_loose_formats() {
        for text in [
            "",
            "2025-1-01",
            "2025/11/01",
            "01-11-2025",
            "20251101",
            "2025-11-01 ",
            "+2025-11-01",
            "2025-13-01",
            "2025-02-30",
            "2023-02-29",
            "tomorrow",
        ] {
            assert_eq!(
                parse_date(text),
                Err(Error::DateFormat(text.to_owned())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(date!(2025 - 12 - 30), 3), date!(2026 - 01 - 02));
        assert_eq!(add_days(Date::MAX, 3), Date::MAX);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = Clock::Fixed(date!(2025 - 10 - 10));
        assert_eq!(clock.today(), date!(2025 - 10 - 10));
    }
}
