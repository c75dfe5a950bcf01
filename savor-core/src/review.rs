use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// A stored review record.
///
/// All three fields are always present in the serialized form: an absent
/// rating or comment is an explicit JSON null, never an omitted key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating in `1..=5`, or null.
    #[serde(default)]
    pub rating: Option<u8>,
    /// Free-form comment. Any JSON value is accepted and stored as-is;
    /// the shape is not enforced to be a string.
    #[serde(default)]
    pub comment: Value,
    /// Every other key of the submitted payload, verbatim.
    #[serde(default)]
    pub meta: Map<String, Value>,
}

impl Review {
    /// Normalizes a parsed write payload into a review record.
    ///
    /// `rating` and `comment` are pulled out of the payload, defaulting to
    /// null; whatever remains becomes `meta` unchanged.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRating`] unless `rating` is null or an
    /// integer in `1..=5`. Non-integer numbers are rejected too.
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self, CoreError> {
        let rating = match payload.remove("rating").unwrap_or(Value::Null) {
            Value::Null => None,
            value => match value.as_u64().and_then(|n| u8::try_from(n).ok()) {
                Some(n @ 1..=5) => Some(n),
                _ => return Err(CoreError::InvalidRating),
            },
        };
        let comment = payload.remove("comment").unwrap_or(Value::Null);
        Ok(Self { rating, comment, meta: payload })
    }
}
