//! CLI argument parsing via clap.

use clap::Parser;

/// Launch the BI Assistant dashboard on the fixed local endpoint.
#[derive(Debug, Parser)]
#[command(name = "bivista", version)]
pub struct Args {
    /// Path to config file (default: ./bivista.toml or ~/.config/bivista/bivista.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the dashboard theme (business, executive, presentation).
    #[arg(short = 't', long = "theme")]
    pub theme: Option<String>,
}
