//! Core of the Lispy reader
//!
//! This crate contains the value model, the grammar engine that turns a line
//! of text into a generic parse tree, the reader that converts that tree into
//! values, and the printer that renders values back to text. The interactive
//! shell lives in the `retainer` crate.

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod printer;
pub mod reader;
pub mod value;

// Re-export commonly used items for convenience
pub use error::{GrammarError, GrammarErrorKind};
pub use grammar::{Ast, parse};
pub use lexer::Position;
pub use printer::{emit, emitln, print, println};
pub use reader::read;
pub use value::{Value, ValueKind};

/// Parse and read a line in one step.
pub fn read_str(source_name: &str, input: &str) -> Result<Value, GrammarError> {
    parse(source_name, input).map(|ast| read(&ast))
}
