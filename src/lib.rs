// Pairmatch - divisor-label matching
// Library exports

// Core modules
pub mod cli;
pub mod error;
pub mod matcher;

pub use error::MatchError;
pub use matcher::{MatchSet, Matcher, Matches, Rule, DEFAULT_UPPER_BOUND};
