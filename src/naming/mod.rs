//! Module for building WinJUPOS output file names from stacked image names.
pub mod error;
mod filename_parsing;
pub mod structs;
mod template;
mod validation;

pub use filename_parsing::parse_stacked_image_filename;
pub use template::expand_imageinfo;
pub use validation::{RESERVED_CHARACTERS, validate_field, validate_observer};

use error::ValidationError;
use structs::{FieldName, ImageInfoParams};

/// Builds `{wj_time}-{observer}[-{imageinfo}].{extension}`.
///
/// The observer is validated, and so is the expanded image info when it is non-empty.
/// An empty template or an empty expansion adds no suffix.
pub fn output_filename(
    wj_time: &str,
    observer: &str,
    imageinfo_template: Option<&str>,
    params: &ImageInfoParams,
    extension: &str,
) -> Result<String, ValidationError> {
    validate_observer(observer)?;

    let imageinfo = imageinfo_template
        .filter(|t| !t.is_empty())
        .map(|t| expand_imageinfo(t, params))
        .unwrap_or_default();

    if imageinfo.is_empty() {
        return Ok(format!("{wj_time}-{observer}.{extension}"));
    }
    validate_field(FieldName::ImageInfo, &imageinfo)?;
    Ok(format!("{wj_time}-{observer}-{imageinfo}.{extension}"))
}
