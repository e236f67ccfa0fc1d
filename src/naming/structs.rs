use crate::time::structs::FrameRange;
use serde::{Deserialize, Serialize};

/// A stacked image file name, broken into the parts that matter for renaming.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StackedImageRef {
    /// `hh_mm_ss` token joining the image to its capture session.
    pub session_key: String,
    /// AutoStakkert! free field, spaces removed.
    pub free_field: Option<String>,
    /// Frames used for the stack, from a `_limit<start>-<end>` segment.
    pub frame_range: Option<FrameRange>,
    /// File suffix without the dot, case preserved.
    pub extension: String,
}

/// Values available to `{name}` placeholders in the image info template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageInfoParams {
    pub cam: Option<String>,
    pub ff: Option<String>,
}

impl ImageInfoParams {
    /// `None` if there is no parameter called `name`, `Some(None)` if it exists but has no value.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        match name {
            "cam" => Some(self.cam.as_deref()),
            "ff" => Some(self.ff.as_deref()),
            _ => None,
        }
    }
}

/// Text fields that end up in the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Observer,
    ImageInfo,
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Observer => write!(f, "observer"),
            Self::ImageInfo => write!(f, "imageinfo"),
        }
    }
}
