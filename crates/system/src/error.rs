//! Error types for the turtle-system crate.

/// Error type for parsing model and tradition identifiers.
///
/// The calendar computations themselves are total; these errors only arise
/// when turning untrusted text into the fixed identifier sets.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SystemError {
    /// Returned when a calendar model identifier is not recognised.
    #[error("unknown calendar model: {id:?} (expected one of: teaching_13x28, observed_lunar)")]
    UnknownModel {
        /// The identifier that was provided.
        id: String,
    },

    /// Returned when a tradition identifier is not recognised.
    #[error(
        "unknown tradition: {id:?} (expected one of: anishinaabe, haudenosaunee, cherokee, custom)"
    )]
    UnknownTradition {
        /// The identifier that was provided.
        id: String,
    },
}
