use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Terminals
// ============================================================================

/// `number : /-?[0-9]+/`
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A-?[0-9]+").unwrap());

/// `symbol : '+' | '-' | '/' | '*' | "add" | "min"`
static SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?:[+\-/*]|add|min)").unwrap());

/// Whitespace as C `isspace` sees it; other Unicode spaces are not separators
fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}

/// Location of a token or parse node in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset from the start of the input
    pub offset: usize,
    /// 1-based line number
    pub row: usize,
    /// 1-based column, counted in characters
    pub col: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            row: 1,
            col: 1,
        }
    }
}

// ============================================================================
// Token Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    Number(String),
    /// Single operator character such as `+`
    CharSymbol(String),
    /// Word symbol such as `add`
    WordSymbol(String),
    /// A character no terminal accepts
    Unexpected(char),
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

// ============================================================================
// Lexer
// ============================================================================

pub struct Lexer<'a> {
    input: &'a str,
    position: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: Position::start(),
        }
    }

    fn rest(&self) -> &'a str {
        let input = self.input;
        &input[self.position.offset..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position.offset += ch.len_utf8();
            if ch == '\n' {
                self.position.row += 1;
                self.position.col = 1;
            } else {
                self.position.col += 1;
            }
        }
    }

    /// Consume `len` bytes of already-matched text.
    fn advance_by(&mut self, len: usize) -> &'a str {
        let start = self.position.offset;
        while self.position.offset < start + len {
            self.advance();
        }
        let input = self.input;
        &input[start..self.position.offset]
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !is_space(ch) {
                break;
            }
            self.advance();
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let position = self.position;

        let Some(ch) = self.current_char() else {
            return Token {
                kind: TokenKind::Eof,
                position,
            };
        };

        let kind = match ch {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            _ => {
                // Numbers take priority, so "-7" is a literal and "- 7" is not
                if let Some(m) = NUMBER.find(self.rest()) {
                    TokenKind::Number(self.advance_by(m.end()).to_string())
                } else if let Some(m) = SYMBOL.find(self.rest()) {
                    let text = self.advance_by(m.end()).to_string();
                    if text.len() == 1 {
                        TokenKind::CharSymbol(text)
                    } else {
                        TokenKind::WordSymbol(text)
                    }
                } else {
                    self.advance();
                    TokenKind::Unexpected(ch)
                }
            }
        };

        Token { kind, position }
    }

    /// Position just past the last consumed character.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Tokenize a whole line, ending with a single `Eof` token.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
