use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts tried in order, most specific first.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-time layouts carrying a numeric offset (`+0700` or `+07:00`).
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%z",
];

/// Date-only layouts. Ambiguous slash dates are read month-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%m/%d/%Y", "%d-%b-%Y", "%d %b %Y", "%b %d, %Y", "%B %d, %Y",
];

/// Lenient parse of a single date cell.
///
/// Returns `None` for anything that does not look like a date (empty cells,
/// tickers, a repeated header line) so callers can filter instead of failing.
pub fn parse_date_lenient(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Offsets are dropped, keeping the wall-clock time of the exchange
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_local());
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    // `%Y%m%d` would happily read short digit runs like "100" as a year
    if s.chars().all(|c| c.is_ascii_digit()) && s.len() != 8 {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date_lenient("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date_lenient("  2024-01-05 "), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date_lenient("2024/01/05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date_lenient("20240105"), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn parses_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(parse_date_lenient("2024-03-01 09:30:00"), Some(expected));
        assert_eq!(parse_date_lenient("2024-03-01T09:30:00"), Some(expected));
        assert_eq!(parse_date_lenient("2024-03-01 09:30"), Some(expected));
    }

    #[test]
    fn offsets_keep_the_local_calendar_day() {
        let midnight = ymd(2024, 3, 1);
        assert_eq!(parse_date_lenient("2024-03-01 00:00:00+07:00"), Some(midnight));
        assert_eq!(parse_date_lenient("2024-03-01T00:00:00+07:00"), Some(midnight));
        assert_eq!(parse_date_lenient("2024-03-01 00:00:00+0700"), Some(midnight));
        assert_eq!(parse_date_lenient("2024-03-01 00:00:00-0500"), Some(midnight));
    }

    #[test]
    fn slash_dates_are_month_first() {
        assert_eq!(parse_date_lenient("02/03/2024"), Some(ymd(2024, 2, 3)));
        assert_eq!(parse_date_lenient("12/31/2023"), Some(ymd(2023, 12, 31)));
    }

    #[test]
    fn named_months() {
        assert_eq!(parse_date_lenient("05-Jan-2024"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date_lenient("Jan 05, 2024"), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn junk_is_none() {
        assert_eq!(parse_date_lenient(""), None);
        assert_eq!(parse_date_lenient("   "), None);
        assert_eq!(parse_date_lenient("Ticker"), None);
        assert_eq!(parse_date_lenient("TLKM.JK"), None);
        assert_eq!(parse_date_lenient("Date"), None);
        assert_eq!(parse_date_lenient("100"), None);
        assert_eq!(parse_date_lenient("3521.25"), None);
        assert_eq!(parse_date_lenient("2024-02-30"), None);
    }
}
