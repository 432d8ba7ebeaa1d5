//! Token definitions for the comment scanner
//!
//! Tokens are immutable once scanned. Each one carries the exact source
//! slice it was scanned from, so a token stream can always be written back
//! out as the original input.

use serde::Serialize;

/// All token kinds the scanner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A run of plain characters, including escaped pairs like `\"`.
    Text,
    /// A line terminator (`\n` or `\r\n`).
    Newline,
    /// A complete quoted string (`'…'`, `"…"` or `` `…` ``), quotes included.
    QuotedString,
    /// A whole `//` comment, up to but excluding the line terminator.
    LineComment,
    /// A block comment opener: `/*` or `/**`, plus the `!` marker if present.
    BlockOpen,
    /// A block comment closer: `*/`, plus a directly following `\n` if present.
    BlockClose,
}

/// One scanned token, borrowing its text from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The exact source slice this token covers.
    pub raw: &'src str,
    /// True when the first character after the comment marker is `!`.
    pub protected: bool,
    /// The newline captured after `*/`, when there was one. Also part of
    /// `raw`, so a stripped block comment swallows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_newline: Option<&'src str>,
}

impl<'src> Token<'src> {
    fn new(kind: TokenKind, raw: &'src str) -> Self {
        Token {
            kind,
            raw,
            protected: false,
            trailing_newline: None,
        }
    }

    pub fn text(raw: &'src str) -> Self {
        Token::new(TokenKind::Text, raw)
    }

    pub fn newline(raw: &'src str) -> Self {
        Token::new(TokenKind::Newline, raw)
    }

    pub fn quoted(raw: &'src str) -> Self {
        Token::new(TokenKind::QuotedString, raw)
    }

    pub fn line_comment(raw: &'src str, protected: bool) -> Self {
        Token {
            protected,
            ..Token::new(TokenKind::LineComment, raw)
        }
    }

    pub fn block_open(raw: &'src str, protected: bool) -> Self {
        Token {
            protected,
            ..Token::new(TokenKind::BlockOpen, raw)
        }
    }

    pub fn block_close(raw: &'src str, trailing_newline: Option<&'src str>) -> Self {
        Token {
            trailing_newline,
            ..Token::new(TokenKind::BlockClose, raw)
        }
    }

    /// Check if this token is plain text.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text)
    }

    /// Check if this token starts a comment (line or block).
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockOpen)
    }
}
