//! WinJUPOS time encoding: `YYYY-MM-DD-HHmm.m`.

use chrono::{DateTime, TimeZone, Timelike};

/// Formats `time` the way WinJUPOS expects it in image filenames.
///
/// The calendar fields are taken from `time` as-is, no timezone conversion is done.
/// Minutes carry one rounded decimal (half-up). A value that rounds to `60.0` is
/// emitted as `60.0` and is not carried into the hour.
pub fn to_winjupos_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let microsecond = time.nanosecond() / 1_000;
    let minutes =
        f64::from(time.minute()) + (f64::from(time.second()) + f64::from(microsecond) / 1e6) / 60.0;
    let tenths = round_half_up_tenths(minutes);
    format!(
        "{}-{:02}{:02}.{}",
        time.format("%Y-%m-%d"),
        time.hour(),
        tenths / 10,
        tenths % 10
    )
}

/// Rounds a non-negative value to one decimal, ties away from zero, returned in tenths.
///
/// Rounding works on the shortest decimal representation of the float, so `5.05`
/// becomes `5.1` even though the nearest binary value is slightly below it.
pub fn round_half_up_tenths(value: f64) -> u64 {
    let repr = value.abs().to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let whole: u64 = whole.parse().unwrap_or(0);
    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let first = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|second| second >= 5);
    whole * 10 + first + u64::from(round_up)
}
