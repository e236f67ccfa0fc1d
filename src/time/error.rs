use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeError {
    #[error("Capture session is missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Frame range {start}-{end} does not fit a capture of {frame_count} frames")]
    FrameRangeOutOfBounds {
        start: u64,
        end: u64,
        frame_count: u64,
    },
}
