/// Errors produced by the `savor-core` crate.
///
/// Every variant is a client-input error; the gateway converts each one
/// directly into a 400 response whose body carries the Display message.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The value contains a character outside `[0-9a-fA-F]`.
    #[error("{value} is not hexadecimal")]
    NotHexadecimal { value: String },

    /// The value is valid hex but not exactly 64 digits long.
    #[error("hexadecimal number should have 64 digits")]
    WrongLength,

    /// A submitted rating was neither null nor an integer in `1..=5`.
    #[error("rating (if specified) should be 1, 2, 3, 4, or 5")]
    InvalidRating,
}
