use std::fmt;
use std::io::{self, Write};

use crate::value::Value;

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(message) => write!(f, "Error: {message}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Sexpr(cells) => {
                write!(f, "(")?;
                for (i, cell) in cells.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{cell}")?;
                }
                write!(f, ")")
            }
        }
    }
}

// ============================================================================
// Printer
// ============================================================================

pub fn print(value: &Value) -> String {
    value.to_string()
}

pub fn println(value: &Value) -> String {
    format!("{value}\n")
}

/// Write the rendering of `value` to `out`.
pub fn emit<W: Write + ?Sized>(out: &mut W, value: &Value) -> io::Result<()> {
    write!(out, "{value}")
}

/// Like [`emit`], followed by a newline.
pub fn emitln<W: Write + ?Sized>(out: &mut W, value: &Value) -> io::Result<()> {
    writeln!(out, "{value}")
}
