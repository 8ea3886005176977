use std::path::PathBuf;

use clap::Parser;

/// Termfolio: a terminal-styled personal portfolio for your terminal.
#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, termfolio=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Tab to open at launch (home, about, projects, blog, contact).
    #[arg(short = 't', long)]
    pub tab: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
