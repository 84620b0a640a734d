use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PROMPT: &str = "retainer> ";

/// Interactive reader for Lispy expressions
#[derive(Debug, Parser)]
#[command(name = "retainer", version, about)]
pub struct Args {
    /// Read every line of FILE instead of starting the interactive prompt
    pub file: Option<PathBuf>,

    /// Prompt shown before each line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// History file (defaults to the user data directory)
    #[arg(long, value_name = "PATH", conflicts_with = "no_history")]
    pub history: Option<PathBuf>,

    /// Do not load or save history
    #[arg(long)]
    pub no_history: bool,

    /// Use plain line input instead of the line editor
    #[arg(long)]
    pub plain: bool,

    /// Dump each parse tree to stderr before reading it
    #[arg(long)]
    pub trace: bool,
}

/// Settings the REPL runs with, resolved from [`Args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub history: Option<PathBuf>,
    pub plain: bool,
    pub trace: bool,
    /// Label used in grammar error messages
    pub source_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            history: Some(default_history_path()),
            plain: false,
            trace: false,
            source_name: "<stdin>".to_string(),
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let history = if args.no_history {
            None
        } else {
            Some(args.history.clone().unwrap_or_else(default_history_path))
        };
        let source_name = match args.file {
            Some(ref path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        };
        Config {
            prompt: args.prompt.clone(),
            history,
            plain: args.plain,
            trace: args.trace,
            source_name,
        }
    }
}

/// `<data dir>/retainer/history.txt`, or `.retainer_history` in the working
/// directory when the platform has no data directory.
pub fn default_history_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("retainer").join("history.txt"),
        None => PathBuf::from(".retainer_history"),
    }
}
