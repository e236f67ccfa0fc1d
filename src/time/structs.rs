use serde::{Deserialize, Serialize};

/// Inclusive, 0-based range of frames from a capture that went into a stack.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrameRange {
    pub start: u64,
    pub end: u64,
}

impl FrameRange {
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Frame offset of the temporal centre of the range. May be fractional.
    pub fn midpoint(&self) -> f64 {
        (self.start as f64 + self.end as f64) / 2.0
    }
}
