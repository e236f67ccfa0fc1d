use super::structs::FieldName;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("observer is not specified")]
    MissingObserver,

    #[error("{field} contains non-ASCII character: '{value}'")]
    NonAscii { field: FieldName, value: String },

    #[error("{field} contains bad character '{character}': '{value}'")]
    ReservedCharacter {
        field: FieldName,
        value: String,
        character: char,
    },
}
