//! Line-oriented parser for SharpCap `.CameraSettings.txt` files.

use super::error::SessionError;
use super::structs::CaptureSession;
use crate::time::parsing::parse_sharpcap_time;
use regex::Regex;
use std::sync::LazyLock;

static RE_SETTINGS_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2}_[0-9]{2}_[0-9]{2})\.CameraSettings\.txt$").unwrap());
static RE_PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// Fields recognized in a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Camera,
    StartCapture,
    MidCapture,
    EndCapture,
    FrameCount,
}

impl FieldKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Camera => "Camera",
            Self::StartCapture => "StartCapture",
            Self::MidCapture => "MidCapture",
            Self::EndCapture => "EndCapture",
            Self::FrameCount => "FrameCount",
        }
    }
}

// Tried in order; the first match wins. Lines matching none are ignored.
static LINE_MATCHERS: LazyLock<Vec<(FieldKind, Regex)>> = LazyLock::new(|| {
    [
        (FieldKind::Camera, r"^\[(.+)\]$"),
        (FieldKind::StartCapture, r"^StartCapture\s*=\s*(.+)$"),
        (FieldKind::MidCapture, r"^MidCapture\s*=\s*(.+)$"),
        (FieldKind::EndCapture, r"^EndCapture\s*=\s*(.+)$"),
        (FieldKind::FrameCount, r"^FrameCount\s*=\s*([0-9]+)$"),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).unwrap()))
    .collect()
});

/// Extracts the `hh_mm_ss` session key from a settings filename.
pub fn session_key_from_filename(filename: &str) -> Option<&str> {
    RE_SETTINGS_FILENAME
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classifies a single line, returning the field kind and its raw value.
pub fn match_line(line: &str) -> Option<(FieldKind, &str)> {
    LINE_MATCHERS.iter().find_map(|(kind, re)| {
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| (*kind, m.as_str()))
    })
}

/// Normalizes a bracketed camera declaration, e.g. "ZWO ASI294MC (color)" -> "ZWOASI294MC".
pub fn normalize_camera_name(raw: &str) -> Option<String> {
    let camera: String = RE_PARENTHESIZED
        .replace_all(raw, "")
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();
    (!camera.is_empty()).then_some(camera)
}

/// Parses the contents of one settings file into a `CaptureSession`.
pub fn parse_session(session_key: &str, content: &str) -> Result<CaptureSession, SessionError> {
    let mut session = CaptureSession::new(session_key);

    for (index, line) in content.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((kind, value)) = match_line(line) else {
            continue;
        };
        let line_number = index + 1;
        match kind {
            FieldKind::Camera => {
                if session.camera.is_none() {
                    session.camera = normalize_camera_name(value);
                }
            }
            FieldKind::StartCapture => {
                session.start_capture = Some(parse_timestamp(kind, line_number, value)?);
            }
            FieldKind::MidCapture => {
                session.mid_capture = Some(parse_timestamp(kind, line_number, value)?);
            }
            FieldKind::EndCapture => {
                session.end_capture = Some(parse_timestamp(kind, line_number, value)?);
            }
            FieldKind::FrameCount => {
                let count = value
                    .parse::<u64>()
                    .map_err(|_| SessionError::InvalidFrameCount {
                        line: line_number,
                        value: value.to_string(),
                    })?;
                session.frame_count = Some(count);
            }
        }
    }

    Ok(session)
}

fn parse_timestamp(
    kind: FieldKind,
    line: usize,
    value: &str,
) -> Result<chrono::DateTime<chrono::FixedOffset>, SessionError> {
    parse_sharpcap_time(value).ok_or_else(|| SessionError::InvalidTimestamp {
        field: kind.name(),
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = "\
[ZWO ASI294MC (color)]
Debayer Preview=On
Pan=0
Tilt=0
#Black Point
Output Format=SER file (*.ser)

[Camera Controls]
StartCapture=2023-01-01T10:00:00.0000000+00:00
MidCapture=2023-01-01T10:05:00.0000000+00:00
EndCapture=2023-01-01T10:10:00.0000000+00:00
FrameCount=6000
";

    #[test]
    fn test_session_key_from_filename() {
        assert_eq!(
            session_key_from_filename("12_30_45.CameraSettings.txt"),
            Some("12_30_45")
        );
        assert_eq!(
            session_key_from_filename("Jupiter_12_30_45.CameraSettings.txt"),
            Some("12_30_45")
        );
        assert_eq!(session_key_from_filename("12_30_45.CameraSettings.txt.bak"), None);
        assert_eq!(session_key_from_filename("1_30_45.CameraSettings.txt"), None);
    }

    #[test]
    fn test_parse_full_settings_file() {
        let session = parse_session("12_30_45", SETTINGS).unwrap();
        assert_eq!(session.session_key, "12_30_45");
        assert_eq!(session.camera.as_deref(), Some("ZWOASI294MC"));
        assert_eq!(session.frame_count, Some(6000));
        assert_eq!(
            session.start_capture.unwrap().to_rfc3339(),
            "2023-01-01T10:00:00+00:00"
        );
        assert_eq!(
            session.mid_capture.unwrap().to_rfc3339(),
            "2023-01-01T10:05:00+00:00"
        );
        assert_eq!(
            session.end_capture.unwrap().to_rfc3339(),
            "2023-01-01T10:10:00+00:00"
        );
    }

    #[test]
    fn test_first_bracket_line_is_camera() {
        // "[Camera Controls]" must not replace the declared camera.
        let session = parse_session("00_00_00", "[QHY5III-462C]\n[Camera Controls]\n").unwrap();
        assert_eq!(session.camera.as_deref(), Some("QHY5III462C"));
    }

    #[test]
    fn test_empty_camera_treated_as_absent() {
        let session = parse_session("00_00_00", "[(unknown)]\n[Player One Mars-C]\n").unwrap();
        assert_eq!(session.camera.as_deref(), Some("PlayerOneMarsC"));
    }

    #[test]
    fn test_unknown_and_comment_lines_ignored() {
        let content = "# FrameCount=1\nSomeFutureKey=42\n\nFrameCount = 12\nFrameCount=abc\n";
        let session = parse_session("01_02_03", content).unwrap();
        assert_eq!(session.frame_count, Some(12));
        assert!(session.camera.is_none());
        assert!(session.start_capture.is_none());
        assert!(session.mid_capture.is_none());
        assert!(session.end_capture.is_none());
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "[ZWO ASI462MC]\r\nMidCapture=2023-01-01T10:05:00.1234567+01:00\r\n";
        let session = parse_session("01_02_03", content).unwrap();
        assert_eq!(session.camera.as_deref(), Some("ZWOASI462MC"));
        assert_eq!(
            session.mid_capture.unwrap().to_rfc3339(),
            "2023-01-01T10:05:00.123456+01:00"
        );
    }

    #[test]
    fn test_offset_forms_in_settings_file() {
        let content = "\
StartCapture=2023-01-01T10:00:00.0000000Z
MidCapture=2023-01-01T19:05:00.0000000+0900
EndCapture=2023-01-01T05:10:00.0000000-0500
";
        let session = parse_session("10_00_00", content).unwrap();
        let start = session.start_capture.unwrap();
        let mid = session.mid_capture.unwrap();
        let end = session.end_capture.unwrap();
        assert_eq!(start.offset().local_minus_utc(), 0);
        assert_eq!(mid.offset().local_minus_utc(), 9 * 3600);
        assert_eq!(end.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(mid.to_rfc3339(), "2023-01-01T19:05:00+09:00");
        assert_eq!(end.to_rfc3339(), "2023-01-01T05:10:00-05:00");
    }

    #[test]
    fn test_invalid_timestamp_is_an_error() {
        let err = parse_session("01_02_03", "[Cam]\nStartCapture=yesterday\n").unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTimestamp {
                field: "StartCapture",
                line: 2,
                value: "yesterday".to_string(),
            }
        );
    }

    #[test]
    fn test_match_line_kinds() {
        assert_eq!(match_line("[ZWO]"), Some((FieldKind::Camera, "ZWO")));
        assert_eq!(match_line("FrameCount=5"), Some((FieldKind::FrameCount, "5")));
        assert_eq!(match_line("FrameCount=-5"), None);
        assert_eq!(match_line("  StartCapture=x"), None);
        assert_eq!(match_line("Gain=300"), None);
    }
}
