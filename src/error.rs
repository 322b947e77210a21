// Library error types

use thiserror::Error;

/// Errors raised by the matcher itself.
///
/// A failure inside a caller-supplied predicate is never wrapped in one of
/// these variants; it propagates to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The rule collection argument was absent.
    #[error("rule collection is required")]
    MissingRules,
}
