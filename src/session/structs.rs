use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Metadata of one SharpCap capture, read from a `.CameraSettings.txt` file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaptureSession {
    /// `hh_mm_ss` token from the metadata filename. Stacked images carry the same
    /// token at the start of their name.
    pub session_key: String,
    /// Camera name with parenthesized parts, spaces and hyphens removed (e.g. "ZWOASI294MC").
    pub camera: Option<String>,
    pub start_capture: Option<DateTime<FixedOffset>>,
    pub mid_capture: Option<DateTime<FixedOffset>>,
    pub end_capture: Option<DateTime<FixedOffset>>,
    /// Total number of frames recorded in the capture.
    pub frame_count: Option<u64>,
}

impl CaptureSession {
    pub fn new(session_key: impl Into<String>) -> Self {
        Self {
            session_key: session_key.into(),
            camera: None,
            start_capture: None,
            mid_capture: None,
            end_capture: None,
            frame_count: None,
        }
    }
}
