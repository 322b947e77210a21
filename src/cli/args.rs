// Command-line argument parsing

use clap::Parser;

use crate::matcher::{Rule, DEFAULT_UPPER_BOUND};

#[derive(Debug, Parser)]
#[command(name = "pairmatch")]
#[command(version, about = "Prints divisor-label matches for an integer range")]
pub struct Args {
    /// Largest candidate integer to test; non-positive prints nothing
    #[arg(short = 'n', long, default_value_t = DEFAULT_UPPER_BOUND)]
    pub limit: i64,

    /// Matching rule as DIVISOR=LABEL; repeatable
    #[arg(short, long = "rule", value_name = "DIVISOR=LABEL", value_parser = parse_rule)]
    pub rules: Vec<Rule>,
}

impl Args {
    /// The rule set to run: the caller's rules, or the classic
    /// Fizz/Buzz defaults when none were given.
    pub fn effective_rules(&self) -> Vec<Rule> {
        if self.rules.is_empty() {
            vec![Rule::new(3, "Fizz"), Rule::new(5, "Buzz")]
        } else {
            self.rules.clone()
        }
    }
}

/// Parses a `DIVISOR=LABEL` argument into a rule. An empty label yields an
/// unlabeled rule.
pub fn parse_rule(raw: &str) -> Result<Rule, String> {
    let (divisor, label) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected DIVISOR=LABEL, got '{raw}'"))?;

    let divisor: i64 = divisor
        .trim()
        .parse()
        .map_err(|_| format!("divisor '{divisor}' is not an integer"))?;

    if label.is_empty() {
        Ok(Rule::unlabeled(divisor))
    } else {
        Ok(Rule::new(divisor, label))
    }
}
