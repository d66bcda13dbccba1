use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "allot", about = "Dispatch requests to command templates", version)]
pub struct Cli {
    /// Request words; one request per stdin line when omitted
    pub request: Vec<String>,

    /// Command template, e.g. "deploy <project> to <stage>" (repeatable)
    #[arg(short = 't', long = "template", value_name = "TEMPLATE")]
    pub templates: Vec<String>,

    /// File with one template per line ('#' starts a comment line)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Match literal template text verbatim instead of as regex syntax
    #[arg(short, long)]
    pub escape: bool,

    /// Print results as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log template compilation and match attempts to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
