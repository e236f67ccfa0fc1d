use super::structs::StackedImageRef;
use crate::time::structs::FrameRange;
use regex::Regex;
use std::sync::OnceLock;

static RE_STACKED_IMAGE: OnceLock<Regex> = OnceLock::new();
static RE_FRAME_LIMIT: OnceLock<Regex> = OnceLock::new();

/// Parses an AutoStakkert! output name such as `12_30_45_L_lapl4_ap80_limit1000-3000.tif`.
///
/// Returns `None` for names that do not start with a session key and a free field.
pub fn parse_stacked_image_filename(filename: &str) -> Option<StackedImageRef> {
    // --- Session key, free field and extension ---
    let re_file = RE_STACKED_IMAGE.get_or_init(|| {
        Regex::new(r"^([0-9]{2}_[0-9]{2}_[0-9]{2})_([^_]+).*\.([A-Za-z0-9_]+)$").unwrap()
    });
    let caps = re_file.captures(filename)?;
    let session_key = caps[1].to_string();
    let free_field: String = caps[2].chars().filter(|c| *c != ' ').collect();
    let extension = caps[3].to_string();

    // --- Optional frame range, the last `_limit<start>-<end>` wins ---
    let re_limit = RE_FRAME_LIMIT
        .get_or_init(|| Regex::new(r"^.*_limit([0-9]+)-([0-9]+)[_.]").unwrap());
    let frame_range = match re_limit.captures(filename) {
        Some(limit) => Some(FrameRange::new(
            limit[1].parse().ok()?,
            limit[2].parse().ok()?,
        )),
        None => None,
    };

    Some(StackedImageRef {
        session_key,
        free_field: (!free_field.is_empty()).then_some(free_field),
        frame_range,
        extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_stack() {
        let image = parse_stacked_image_filename("12_30_45_L.tif").unwrap();
        assert_eq!(image.session_key, "12_30_45");
        assert_eq!(image.free_field.as_deref(), Some("L"));
        assert_eq!(image.frame_range, None);
        assert_eq!(image.extension, "tif");
    }

    #[test]
    fn test_stack_with_limit() {
        let image =
            parse_stacked_image_filename("12_30_45_L_lapl5_ap120_limit1000-3000.tif").unwrap();
        assert_eq!(image.free_field.as_deref(), Some("L"));
        assert_eq!(image.frame_range, Some(FrameRange::new(1000, 3000)));

        let image = parse_stacked_image_filename("12_30_45_L_limit1000-3000_conv.TIF").unwrap();
        assert_eq!(image.frame_range, Some(FrameRange::new(1000, 3000)));
        assert_eq!(image.extension, "TIF");
    }

    #[test]
    fn test_limit_needs_separator() {
        // "_limit10-20x" is not a frame range.
        let image = parse_stacked_image_filename("12_30_45_L_limit10-20x.tif").unwrap();
        assert_eq!(image.frame_range, None);
    }

    #[test]
    fn test_free_field_spaces_removed() {
        let image = parse_stacked_image_filename("01_02_03_R G B_x.png").unwrap();
        assert_eq!(image.free_field.as_deref(), Some("RGB"));

        let image = parse_stacked_image_filename("01_02_03_ _x.png").unwrap();
        assert_eq!(image.free_field, None);
    }

    #[test]
    fn test_extension_is_last_suffix() {
        let image = parse_stacked_image_filename("01_02_03_Jup.stack.tiff").unwrap();
        assert_eq!(image.extension, "tiff");
    }

    #[test]
    fn test_non_matching_names() {
        assert!(parse_stacked_image_filename("Jupiter_12_30_45_L.tif").is_none());
        assert!(parse_stacked_image_filename("12_30_45.tif").is_none());
        assert!(parse_stacked_image_filename("12_30_45_L").is_none());
        assert!(parse_stacked_image_filename("12-30-45_L.tif").is_none());
    }
}
