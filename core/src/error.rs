//! Grammar engine error types.

use std::fmt;

use crate::grammar::MAX_DEPTH;
use crate::lexer::Position;

/// Categories of grammar failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarErrorKind {
    /// A token no rule accepts at this point
    UnexpectedToken,
    /// Input ended while a rule still needed more
    UnexpectedEnd,
    /// Expressions nested deeper than [`MAX_DEPTH`]
    TooDeep,
}

/// A failed match of the input against the grammar.
///
/// Opaque to the reader: the shell only renders it and throws it away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    /// The category of error
    pub kind: GrammarErrorKind,
    /// Name of the input, e.g. `<stdin>` or a file path
    pub source_name: String,
    /// Where matching stopped
    pub position: Position,
    /// What the grammar would have accepted here
    pub expected: Vec<String>,
    /// The offending character, `None` at end of input
    pub found: Option<char>,
}

impl GrammarError {
    pub fn new(
        kind: GrammarErrorKind,
        source_name: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            kind,
            source_name: source_name.into(),
            position,
            expected: Vec::new(),
            found: None,
        }
    }

    /// Create an error for an unexpected character.
    pub fn unexpected(source_name: impl Into<String>, position: Position, found: char) -> Self {
        let mut err = Self::new(GrammarErrorKind::UnexpectedToken, source_name, position);
        err.found = Some(found);
        err
    }

    /// Create an error for input that ended too early.
    pub fn end_of_input(source_name: impl Into<String>, position: Position) -> Self {
        Self::new(GrammarErrorKind::UnexpectedEnd, source_name, position)
    }

    /// Create an error for an expression opened past the nesting limit.
    pub fn too_deep(source_name: impl Into<String>, position: Position) -> Self {
        let mut err = Self::new(GrammarErrorKind::TooDeep, source_name, position);
        err.found = Some('(');
        err
    }

    /// Add an item the grammar would have accepted.
    pub fn expecting(mut self, item: impl Into<String>) -> Self {
        self.expected.push(item.into());
        self
    }
}

/// Join items as `a`, `a or b`, `a, b or c`.
fn join_alternatives(items: &[String]) -> String {
    match items {
        [] => "nothing".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == GrammarErrorKind::TooDeep {
            return write!(
                f,
                "{}:{}:{}: error: expressions nested deeper than {} levels",
                self.source_name, self.position.row, self.position.col, MAX_DEPTH
            );
        }
        write!(
            f,
            "{}:{}:{}: error: expected {} at ",
            self.source_name,
            self.position.row,
            self.position.col,
            join_alternatives(&self.expected)
        )?;
        match self.found {
            Some(ch) => write!(f, "'{ch}'"),
            None => write!(f, "end of input"),
        }
    }
}

impl std::error::Error for GrammarError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unexpected_char() {
        let err = GrammarError::unexpected("<stdin>", Position::start(), 'x')
            .expecting("number")
            .expecting("symbol")
            .expecting("'('");
        assert_eq!(
            err.to_string(),
            "<stdin>:1:1: error: expected number, symbol or '(' at 'x'"
        );
        assert_eq!(err.kind, GrammarErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_display_end_of_input() {
        let position = Position {
            offset: 2,
            row: 1,
            col: 3,
        };
        let err = GrammarError::end_of_input("repl", position).expecting("')'");
        assert_eq!(err.to_string(), "repl:1:3: error: expected ')' at end of input");
        assert_eq!(err.kind, GrammarErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_display_too_deep() {
        let position = Position {
            offset: 1024,
            row: 1,
            col: 1025,
        };
        let err = GrammarError::too_deep("<stdin>", position);
        assert_eq!(
            err.to_string(),
            "<stdin>:1:1025: error: expressions nested deeper than 1024 levels"
        );
        assert_eq!(err.kind, GrammarErrorKind::TooDeep);
    }

    #[test]
    fn test_join_alternatives() {
        assert_eq!(join_alternatives(&[]), "nothing");
        assert_eq!(join_alternatives(&["a".to_string(), "b".to_string()]), "a or b");
    }
}
