//! # sc2winjupos
//!
//! Create copies (or hard links) of stacked images made with SharpCap 4 and
//! AutoStakkert! 3, named the way WinJUPOS image measurement expects:
//! `YYYY-MM-DD-HHmm.m-<observer>[-<imageinfo>].<ext>`.
//!
//! ## How it works
//!
//! - **Capture sessions**: every `hh_mm_ss.CameraSettings.txt` written by SharpCap is read
//!   into a [`CaptureSession`] (camera, start/mid/end of capture, frame count).
//! - **Observation time**: a stacked image is joined to its session by the `hh_mm_ss` prefix
//!   of its name. If AutoStakkert! only used part of the capture (`_limit<start>-<end>`),
//!   the mid-exposure time of those frames is interpolated; otherwise SharpCap's
//!   `MidCapture` is used.
//! - **File name**: the time is written in WinJUPOS notation, followed by the observer and an
//!   optional image info template (`{cam}`, `{ff}`).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sc2winjupos::{Renamer, RenameError};
//! use std::path::Path;
//!
//! fn main() -> Result<(), RenameError> {
//!     let renamer = Renamer::builder()
//!         .observer("jsmith")
//!         .imageinfo("{cam}")
//!         .build()?;
//!
//!     renamer.run(
//!         Path::new("SharpCap Captures/2023-01-01/Jupiter"),
//!         Path::new("stacked"),
//!         Path::new("winjupos"),
//!         |action| println!("{action}"),
//!     )?;
//!     Ok(())
//! }
//! ```

mod error;
pub mod naming;
pub mod renamer;
pub mod session;
pub mod time;
pub mod utils;

pub use error::RenameError;
pub use renamer::{Action, PlannedTransfer, Renamer, TransferMode};
pub use session::{CaptureSession, SessionTable};

/// Default filename pattern of stacked images.
pub const DEFAULT_IMAGE_PATTERN: &str = "*.tif";
/// Filename pattern of SharpCap capture settings files.
pub const SETTINGS_FILE_PATTERN: &str = "*.CameraSettings.txt";
