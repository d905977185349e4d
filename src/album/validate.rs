//! Request body validation
//!
//! Bodies must be JSON objects. Unknown keys are ignored and missing or
//! `null` optional fields take their zero value, but a supplied field of the
//! wrong type is rejected rather than coerced.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::ValidationError;
use super::model::{Album, AlbumFields};

/// Parse the body of a create request. `id` is required and non-empty.
pub fn parse_new_album(body: &[u8]) -> Result<Album, ValidationError> {
    let album: Album = parse_object(body)?;

    if album.id.is_empty() {
        return Err(ValidationError::EmptyId);
    }

    Ok(album)
}

/// Parse the body of an update request. Every field is optional.
pub fn parse_album_fields(body: &[u8]) -> Result<AlbumFields, ValidationError> {
    parse_object(body)
}

fn parse_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ValidationError::InvalidJson(e.to_string()))?;

    // Structs also deserialize from arrays; only objects are accepted here.
    if !value.is_object() {
        return Err(ValidationError::NotAnObject);
    }

    serde_json::from_value(value).map_err(|e| ValidationError::Shape(e.to_string()))
}
