//! Line sources for the REPL.
//!
//! [`EditorSource`] is the normal interactive path. [`PlainSource`] reads from
//! any buffered reader and is used for files, pipes, and terminals the editor
//! cannot drive.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Failure to obtain a line of input.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    Editor(ReadlineError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "input error: {e}"),
            InputError::Editor(e) => write!(f, "line editor error: {e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Editor(e) => Some(e),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

impl From<ReadlineError> for InputError {
    fn from(err: ReadlineError) -> Self {
        InputError::Editor(err)
    }
}

impl From<InputError> for String {
    fn from(err: InputError) -> String {
        err.to_string()
    }
}

/// Supplies raw lines to the REPL.
pub trait LineSource {
    /// Show `prompt` and read one line without its terminator.
    ///
    /// Returns `Ok(None)` when the session should end.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError>;

    /// Remember `line` for recall; a no-op for sources without history.
    fn add_history(&mut self, line: &str);
}

// ============================================================================
// Plain input
// ============================================================================

/// Prompt-and-read over any buffered reader, with no editing or history.
pub struct PlainSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PlainSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        PlainSource { reader, prompt_out }
    }
}

impl PlainSource<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        PlainSource::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineSource for PlainSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        if !prompt.is_empty() {
            self.prompt_out.write_all(prompt.as_bytes())?;
            self.prompt_out.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn add_history(&mut self, _line: &str) {}
}

// ============================================================================
// Line editor
// ============================================================================

/// `rustyline` editor with history persisted to a file.
pub struct EditorSource {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl EditorSource {
    pub fn new(history: Option<PathBuf>) -> Result<Self, InputError> {
        let mut editor = DefaultEditor::new()?;
        if let Some(ref path) = history {
            // A missing history file just means a first run
            if path.exists() {
                if let Err(e) = editor.load_history(path) {
                    eprintln!("warning: could not load history from {}: {e}", path.display());
                }
            }
        }
        Ok(EditorSource { editor, history })
    }

    /// Write history back to disk, creating its directory if needed.
    pub fn save_history(&mut self) -> Result<(), InputError> {
        let Some(ref path) = self.history else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        self.editor.save_history(path)?;
        Ok(())
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            eprintln!("warning: could not add history entry: {e}");
        }
    }
}

impl Drop for EditorSource {
    fn drop(&mut self) {
        if let Err(e) = self.save_history() {
            eprintln!("warning: could not save history: {e}");
        }
    }
}
