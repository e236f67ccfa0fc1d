//! Core logic for determining the mid-exposure instant of a stacked image.

use super::error::TimeError;
use super::structs::FrameRange;
use crate::session::CaptureSession;
use chrono::{DateTime, Duration, FixedOffset};

/// Returns the authoritative mid-exposure instant of a stack built from `session`.
///
/// Without a frame range the recorded `MidCapture` is used directly. With a range,
/// the capture is assumed to run at a constant frame rate between `StartCapture`
/// and `EndCapture`, and the instant is placed at the centre of the used frames.
/// A range reaching past the last frame is rejected.
pub fn mid_exposure_time(
    session: &CaptureSession,
    frame_range: Option<FrameRange>,
) -> Result<DateTime<FixedOffset>, TimeError> {
    let Some(range) = frame_range else {
        return session
            .mid_capture
            .ok_or(TimeError::MissingField { field: "MidCapture" });
    };

    let start = session
        .start_capture
        .ok_or(TimeError::MissingField { field: "StartCapture" })?;
    let end = session
        .end_capture
        .ok_or(TimeError::MissingField { field: "EndCapture" })?;
    let frame_count = session
        .frame_count
        .filter(|&count| count > 0)
        .ok_or(TimeError::MissingField { field: "FrameCount" })?;

    let out_of_bounds = TimeError::FrameRangeOutOfBounds {
        start: range.start,
        end: range.end,
        frame_count,
    };
    if range.start >= frame_count || range.end >= frame_count {
        return Err(out_of_bounds);
    }

    let capture_seconds = total_seconds(end - start);
    let seconds_per_frame = capture_seconds / frame_count as f64;
    let mid_offset_seconds = range.midpoint() * seconds_per_frame;

    start
        .checked_add_signed(microseconds(mid_offset_seconds))
        .ok_or(out_of_bounds)
}

fn total_seconds(delta: Duration) -> f64 {
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

// Sub-microsecond remainders round to even, same as a timedelta built from float seconds.
fn microseconds(seconds: f64) -> Duration {
    Duration::microseconds((seconds * 1e6).round_ties_even() as i64)
}
