//! Utility functions for parsing SharpCap timestamp strings into chrono types.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use regex::Regex;
use std::sync::LazyLock;

// Everything up to the first six fractional digits, then the offset. Extra
// fractional digits (SharpCap writes seven) are dropped.
static RE_SHARPCAP_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^.]+\.[0-9]{6})[0-9]*(.+)$").unwrap());
static RE_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-])([0-9]{2}):?([0-9]{2})$").unwrap());

/// Parses an offset string like "+02:00", "-0500", or "Z" into offset seconds.
pub fn parse_offset_string(offset_str: &str) -> Option<i32> {
    if offset_str == "Z" {
        return Some(0);
    }
    let caps = RE_OFFSET.captures(offset_str)?;
    let sign = if &caps[1] == "-" { -1 } else { 1 };
    let hours = caps[2].parse::<i32>().ok()?;
    let minutes = caps[3].parse::<i32>().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

/// Parses a SharpCap capture timestamp such as `2023-01-01T10:00:00.1234567+00:00`.
///
/// Only the first six fractional digits are significant. The offset is kept as-is,
/// no conversion to UTC happens here.
pub fn parse_sharpcap_time(s: &str) -> Option<DateTime<FixedOffset>> {
    let caps = RE_SHARPCAP_TIME.captures(s.trim())?;
    let naive = NaiveDateTime::parse_from_str(&caps[1], "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    let offset = FixedOffset::east_opt(parse_offset_string(&caps[2])?)?;
    offset.from_local_datetime(&naive).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_offset_variants() {
        assert_eq!(parse_offset_string("Z"), Some(0));
        assert_eq!(parse_offset_string("+00:00"), Some(0));
        assert_eq!(parse_offset_string("+09:00"), Some(9 * 3600));
        assert_eq!(parse_offset_string("-0530"), Some(-(5 * 3600 + 30 * 60)));
        assert_eq!(parse_offset_string("+9:00"), None);
        assert_eq!(parse_offset_string("garbage"), None);
    }

    #[test]
    fn test_parse_sharpcap_time_truncates_seventh_digit() {
        let dt = parse_sharpcap_time("2023-01-01T10:00:00.1234567+09:00").unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.hour(), 10);
        // The seventh digit is dropped, not rounded.
        assert_eq!(dt.nanosecond(), 123_456_000);
        assert_eq!(dt.offset().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_parse_sharpcap_time_exact_six_digits() {
        let dt = parse_sharpcap_time("2022-08-15T18:30:05.000001Z").unwrap();
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 5);
        assert_eq!(dt.nanosecond(), 1_000);
        assert_eq!(dt.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_sharpcap_time_rejects_short_fraction() {
        // Fewer than six fractional digits never matched in SharpCap output.
        assert!(parse_sharpcap_time("2023-01-01T10:00:00.123+00:00").is_none());
        assert!(parse_sharpcap_time("2023-01-01T10:00:00+00:00").is_none());
        assert!(parse_sharpcap_time("not a time").is_none());
    }
}
