//! Port for generating session identifiers.

/// Source of fresh, unique session ids.
///
/// Ids double as storage file names, so implementations must only produce
/// characters that are safe in a file name.
pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> String;
}
