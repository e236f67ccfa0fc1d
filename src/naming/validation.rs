use super::error::ValidationError;
use super::structs::FieldName;

/// Characters WinJUPOS or common filesystems cannot take in a name field.
pub const RESERVED_CHARACTERS: &str = "-/\\:*?\"><|&(){}^=;!'+,`~";

/// Checks that a name field is plain ASCII and free of reserved characters.
pub fn validate_field(field: FieldName, value: &str) -> Result<(), ValidationError> {
    if !value.is_ascii() {
        return Err(ValidationError::NonAscii {
            field,
            value: value.to_string(),
        });
    }
    if let Some(character) = value.chars().find(|c| RESERVED_CHARACTERS.contains(*c)) {
        return Err(ValidationError::ReservedCharacter {
            field,
            value: value.to_string(),
            character,
        });
    }
    Ok(())
}

/// Validates the observer name, which must also be non-empty.
pub fn validate_observer(observer: &str) -> Result<(), ValidationError> {
    if observer.is_empty() {
        return Err(ValidationError::MissingObserver);
    }
    validate_field(FieldName::Observer, observer)
}
