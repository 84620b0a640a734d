use std::io::{self, Write};

use lispy::{emitln, parse, read};

use crate::config::Config;
use crate::input::{InputError, LineSource};

pub const BANNER: &str = "Lispy Version 0.0.0.0.1";
pub const EXIT_HINT: &str = "Press Ctrl+c to Exit";

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{EXIT_HINT}")?;
    writeln!(out)
}

/// Parse, read and print one line.
///
/// The rendered value, or the grammar error, goes to `out`. With `trace`
/// set, the parse tree is dumped to stderr first.
pub fn process_line<W: Write>(line: &str, config: &Config, out: &mut W) -> io::Result<()> {
    match parse(&config.source_name, line) {
        Ok(ast) => {
            if config.trace {
                eprint!("{ast}");
            }
            let value = read(&ast);
            emitln(out, &value)?;
            value.release();
        }
        Err(e) => writeln!(out, "{e}")?,
    }
    Ok(())
}

/// Drive the core once per line until the source runs dry.
///
/// Blank lines are skipped; every other line is added to history before it
/// is processed.
pub fn run<S, W>(source: &mut S, config: &Config, out: &mut W) -> Result<(), InputError>
where
    S: LineSource + ?Sized,
    W: Write,
{
    while let Some(line) = source.read_line(&config.prompt)? {
        if line.trim().is_empty() {
            continue;
        }
        source.add_history(&line);
        process_line(&line, config, out)?;
        out.flush()?;
    }
    Ok(())
}
