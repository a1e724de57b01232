use clap::Parser;
use linediff_core::ColorMode;

/// Show the line-level difference between two documents
#[derive(Debug, Parser)]
#[command(name = "linediff", version, about)]
pub struct Cli {
    /// Old document (`-` reads standard input)
    pub old: String,

    /// New document (`-` reads standard input)
    pub new: String,

    /// When to color the output: auto, always, never
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Print rendered lines as JSON
    #[arg(long, conflicts_with = "stat")]
    pub json: bool,

    /// Print only a summary of added, removed and unchanged lines
    #[arg(long)]
    pub stat: bool,

    /// Exit with status 1 when the documents differ
    #[arg(long)]
    pub exit_code: bool,

    /// Do not mark lines that lack a trailing line break
    #[arg(long)]
    pub no_newline_marker: bool,

    /// Largest document to accept, in bytes (0 for no limit)
    #[arg(long, value_name = "BYTES")]
    pub max_bytes: Option<u64>,

    /// Specify configuration file path
    #[arg(long, env = "LINEDIFF_CONFIG")]
    pub config: Option<String>,

    /// Log level
    #[arg(long, env = "LINEDIFF_LOG_LEVEL")]
    pub log_level: Option<String>,
}
