// Pairmatch - prints divisor-label matches to stdout
// Main entry point

use anyhow::Result;
use clap::Parser;

use pairmatch::cli::Args;
use pairmatch::matcher::Matcher;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let rules = args.effective_rules();

    let matcher = Matcher::new();
    for line in matcher.matches_up_to(Some(&rules), args.limit)? {
        println!("{}", line);
    }

    Ok(())
}
