use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Lists commits on all branches within a period across multiple git
/// repositories, grouped by day. Useful for filling out timesheets;
/// dates reflect when commits were made, not when the work happened.
#[derive(Parser)]
#[command(name = "gitsheet")]
#[command(about = "Lists commits on all branches across multiple git repositories, grouped by day")]
#[command(version)]
pub struct Cli {
    #[arg(help = "File containing absolute paths to git repositories, one per line ('#' comments understood)")]
    pub repos_file: PathBuf,

    #[arg(short, long, help = "Start date (ex: \"2017-05-01\"), paired with --end")]
    pub start: Option<String>,

    #[arg(short, long, help = "End date (ex: \"2017-05-31\"), paired with --start")]
    pub end: Option<String>,

    #[arg(short, long, help = "Month (ex: \"2017-05\")")]
    pub month: Option<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::report::exec(self)
    }
}
