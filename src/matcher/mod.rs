// Matcher module
// Public interface for divisor-label matching

mod engine;
mod rules;

pub use engine::{Matcher, Matches, DEFAULT_UPPER_BOUND};
pub use rules::{MatchSet, Rule};
