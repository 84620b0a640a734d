//! Grammar engine: matches a line against the Lispy grammar and produces a
//! generic parse tree.
//!
//! ```text
//! number : /-?[0-9]+/ ;
//! symbol : '+' | '-' | '/' | '*' | "add" | "min" ;
//! sexpr  : '(' <expr>* ')' ;
//! expr   : <number> | <symbol> | <sexpr> ;
//! lispy  : /^/ <expr>+ /$/ ;
//! ```
//!
//! Nodes are tagged the way combinator grammar libraries tag them: a rule
//! that reduces to a single child folds into it, joining names with `|`
//! (`expr|number|regex`), interior sequences end in `>`, and terminals are
//! tagged by how they matched (`regex`, `char`, `string`). Consumers should
//! only ever test tags for substrings.
//!
//! Expressions may nest at most [`MAX_DEPTH`] levels. The reader, the printer
//! and `Ast` itself all recurse once per level, so the limit keeps every
//! stage within the call stack; deeper input is a [`GrammarError`].

use std::fmt;

use crate::error::GrammarError;
use crate::lexer::{Lexer, Position, Token, TokenKind};

/// Deepest nesting of parenthesized expressions the grammar accepts.
pub const MAX_DEPTH: usize = 1024;

/// Tag of the whole-input node.
pub const ROOT: &str = ">";
/// Tag of the `/^/` and `/$/` anchors.
pub const REGEX: &str = "regex";
/// Tag of structural punctuation.
pub const CHAR: &str = "char";

pub const NUMBER_RULE: &str = "number";
pub const SYMBOL_RULE: &str = "symbol";
pub const SEXPR_RULE: &str = "sexpr";

const NUMBER_TAG: &str = "expr|number|regex";
const CHAR_SYMBOL_TAG: &str = "expr|symbol|char";
const WORD_SYMBOL_TAG: &str = "expr|symbol|string";
const SEXPR_TAG: &str = "expr|sexpr|>";

/// A node of the generic parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    pub tag: String,
    /// Matched text; empty for interior nodes and anchors
    pub contents: String,
    pub position: Position,
    pub children: Vec<Ast>,
}

impl Ast {
    fn leaf(tag: &str, contents: impl Into<String>, position: Position) -> Self {
        Ast {
            tag: tag.to_string(),
            contents: contents.into(),
            position,
            children: Vec::new(),
        }
    }

    fn node(tag: &str, position: Position, children: Vec<Ast>) -> Self {
        Ast {
            tag: tag.to_string(),
            contents: String::new(),
            position,
            children,
        }
    }

    fn fmt_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = depth * 2)?;
        if self.children.is_empty() {
            writeln!(
                f,
                "{}:{}:{} '{}'",
                self.tag, self.position.row, self.position.col, self.contents
            )?;
        } else {
            writeln!(f, "{} ", self.tag)?;
            for child in &self.children {
                child.fmt_depth(f, depth + 1)?;
            }
        }
        Ok(())
    }
}

/// Indented tree dump, one node per line.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_depth(f, 0)
    }
}

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a> {
    source_name: &'a str,
    lexer: Lexer<'a>,
    lookahead: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(source_name: &'a str, input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let lookahead = lexer.next_token();
        Parser {
            source_name,
            lexer,
            lookahead,
            depth: 0,
        }
    }

    fn bump(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.lookahead, next)
    }

    fn error_here(&self) -> GrammarError {
        match self.lookahead.kind {
            TokenKind::Eof => GrammarError::end_of_input(self.source_name, self.lookahead.position),
            TokenKind::LParen => {
                GrammarError::unexpected(self.source_name, self.lookahead.position, '(')
            }
            TokenKind::RParen => {
                GrammarError::unexpected(self.source_name, self.lookahead.position, ')')
            }
            TokenKind::Unexpected(ch) => {
                GrammarError::unexpected(self.source_name, self.lookahead.position, ch)
            }
            TokenKind::Number(ref text)
            | TokenKind::CharSymbol(ref text)
            | TokenKind::WordSymbol(ref text) => GrammarError::unexpected(
                self.source_name,
                self.lookahead.position,
                text.chars().next().unwrap_or(' '),
            ),
        }
    }

    fn starts_expr(&self) -> bool {
        matches!(
            self.lookahead.kind,
            TokenKind::Number(_)
                | TokenKind::CharSymbol(_)
                | TokenKind::WordSymbol(_)
                | TokenKind::LParen
        )
    }

    /// `expr : <number> | <symbol> | <sexpr>`
    ///
    /// Only called when [`Parser::starts_expr`] holds.
    fn expr(&mut self) -> Result<Ast, GrammarError> {
        let token = self.bump();
        match token.kind {
            TokenKind::Number(text) => Ok(Ast::leaf(NUMBER_TAG, text, token.position)),
            TokenKind::CharSymbol(text) => Ok(Ast::leaf(CHAR_SYMBOL_TAG, text, token.position)),
            TokenKind::WordSymbol(text) => Ok(Ast::leaf(WORD_SYMBOL_TAG, text, token.position)),
            TokenKind::LParen => self.sexpr(token.position),
            TokenKind::RParen | TokenKind::Unexpected(_) | TokenKind::Eof => {
                unreachable!("expr called on a token that cannot start an expression")
            }
        }
    }

    /// `sexpr : '(' <expr>* ')'`, with the opening paren already consumed.
    fn sexpr(&mut self, open: Position) -> Result<Ast, GrammarError> {
        if self.depth == MAX_DEPTH {
            return Err(GrammarError::too_deep(self.source_name, open));
        }
        self.depth += 1;
        let result = self.sexpr_body(open);
        self.depth -= 1;
        result
    }

    fn sexpr_body(&mut self, open: Position) -> Result<Ast, GrammarError> {
        let mut children = vec![Ast::leaf(CHAR, "(", open)];
        loop {
            if self.starts_expr() {
                children.push(self.expr()?);
            } else if self.lookahead.kind == TokenKind::RParen {
                let close = self.bump();
                children.push(Ast::leaf(CHAR, ")", close.position));
                return Ok(Ast::node(SEXPR_TAG, open, children));
            } else {
                return Err(expecting_expr(self.error_here()).expecting("')'"));
            }
        }
    }

    /// `lispy : /^/ <expr>+ /$/`
    fn lispy(&mut self) -> Result<Ast, GrammarError> {
        let mut children = vec![Ast::leaf(REGEX, "", Position::start())];

        if !self.starts_expr() {
            return Err(expecting_expr(self.error_here()));
        }
        while self.starts_expr() {
            children.push(self.expr()?);
        }
        if self.lookahead.kind != TokenKind::Eof {
            return Err(expecting_expr(self.error_here()).expecting("end of input"));
        }

        children.push(Ast::leaf(REGEX, "", self.lexer.position()));
        Ok(Ast::node(ROOT, Position::start(), children))
    }
}

fn expecting_expr(err: GrammarError) -> GrammarError {
    err.expecting("number").expecting("symbol").expecting("'('")
}

/// Match `input` against the grammar.
///
/// `source_name` only labels error messages (`<stdin>`, a file path, ...).
pub fn parse(source_name: &str, input: &str) -> Result<Ast, GrammarError> {
    Parser::new(source_name, input).lispy()
}
