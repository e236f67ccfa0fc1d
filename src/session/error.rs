use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid {field} timestamp on line {line}: '{value}'")]
    InvalidTimestamp {
        field: &'static str,
        line: usize,
        value: String,
    },

    #[error("Invalid FrameCount on line {line}: '{value}'")]
    InvalidFrameCount { line: usize, value: String },
}
