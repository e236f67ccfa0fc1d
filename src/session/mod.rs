//! Module for reading SharpCap capture settings into capture sessions.
pub mod error;
pub mod parsing;
pub mod structs;
mod table;

pub use structs::CaptureSession;
pub use table::SessionTable;
