//! Parsing of entity ids taken from request paths.

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a raw path segment into a [`DbId`].
///
/// Surrounding whitespace is ignored. Anything that is not a plain base-10
/// integer (including trailing garbage such as `"12abc"`) is rejected with
/// [`CoreError::Validation`] naming the entity, e.g. `"Invalid staff ID: abc"`.
pub fn parse_id(raw: &str, entity: &str) -> Result<DbId, CoreError> {
    raw.trim().parse::<DbId>().map_err(|_| {
        CoreError::Validation(format!("Invalid {} ID: {raw}", entity.to_lowercase()))
    })
}
