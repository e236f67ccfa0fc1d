//! Module for reconciling capture metadata into a WinJUPOS observation time.
pub mod error;
mod format;
mod logic;
pub mod parsing;
pub mod structs;

pub use format::{round_half_up_tenths, to_winjupos_time};
pub use logic::mid_exposure_time;
