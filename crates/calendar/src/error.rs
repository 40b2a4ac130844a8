use thiserror::Error;

/// Failures surfaced by feed parsing and layout construction.
///
/// Both variants abort startup: a bad record must not be silently dropped
/// (that would shift week and column indices for every later day), and an
/// invariant violation means the layout engine itself is wrong.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// The feed document, a date, or a count could not be parsed, or the
    /// dataset breaks the unique-date invariant.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Internal bug signal; structurally impossible for valid input.
    #[error("layout invariant violated: {0}")]
    LayoutInvariantViolation(String),
}
