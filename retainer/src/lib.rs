//! Retainer - interactive shell around the Lispy reader
//!
//! This crate owns everything outside the core:
//! - Command-line configuration
//! - Line sources (line editor with history, plain fallback)
//! - The read-print loop that feeds each line to the core

pub mod config;
pub mod input;
pub mod repl;

pub use config::{Args, Config};
pub use input::{EditorSource, InputError, LineSource, PlainSource};
pub use repl::{print_banner, process_line, run};
