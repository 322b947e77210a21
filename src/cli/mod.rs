// CLI module
// Public interface for the command-line front end

mod args;

pub use args::{parse_rule, Args};
