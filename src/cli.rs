use std::path::PathBuf;

use clap::Parser;

use crate::domain::models::GuestRecord;
use crate::domain::resolve::{resolve, Outcome};

#[derive(Parser, Debug)]
#[command(name = "seatfinder", bin_name = "seatfinder")]
#[command(about = "Find your table at the wedding")]
#[command(after_help = r#"EXAMPLES:
  seatfinder
  seatfinder --guests tables.toml
  seatfinder --lookup "mary smith""#)]
pub struct Cli {
    /// Guest list to load (overrides the config file)
    #[arg(long, short = 'g', value_name = "PATH")]
    pub guests: Option<PathBuf>,

    /// Config file [default: ~/.config/seatfinder/config.toml]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Resolve NAME once, print the result and exit
    #[arg(long, short = 'l', value_name = "NAME")]
    pub lookup: Option<String>,
}

/// Text printed by `--lookup`, and whether a table was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReport {
    pub output: String,
    pub found: bool,
}

pub fn lookup(name: &str, records: &[GuestRecord]) -> LookupReport {
    let outcome = resolve(name, records);
    tracing::debug!(outcome = outcome.label(), "lookup");

    let mut output = outcome.message();
    if let Outcome::Ambiguous(candidates) = &outcome {
        for record in candidates {
            let line = format!("\n  {} (Table {})", record.full_name, record.table_number);
            output.push_str(&line);
        }
    }

    LookupReport {
        output,
        found: outcome.record().is_some(),
    }
}
