//! Implementation of the comment scanner
//!
//! A single greedy left-to-right pass. At every position the rules below
//! are tried in order; the first match wins and the cursor advances by at
//! least one character, so the scan is linear and never backtracks across
//! tokens:
//!
//! 1. escaped pair (`\` + one character) — always text, so an escaped
//!    quote or slash can never open a string or comment
//! 2. quoted string — suppressed inside a block comment body
//! 3. newline
//! 4. block comment open — only when block mode is on and we are not
//!    already inside a block comment (block comments do not nest)
//! 5. block comment close — only inside a block comment
//! 6. line comment — only when line mode is on and outside block comments
//! 7. plain text: the longest run free of marker characters, or failing
//!    that a single character
//!
//! An unmatched quote falls through to rule 7: the quote character becomes
//! a one-character text token and scanning continues after it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexer::tokens::{Token, TokenKind};
use crate::options::StripOptions;

static ESCAPED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\.").unwrap());
// Non-greedy to the nearest closing quote of the same kind; an escaped
// pair is consumed whole, so `\'` cannot close a single-quoted string.
static QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:'(?:\\.|[^'])*?'|"(?:\\.|[^"])*?"|`(?:\\.|[^`])*?`)"#).unwrap()
});
static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\r?\n").unwrap());
static BLOCK_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/\*\*?!?").unwrap());
static BLOCK_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*/\n?").unwrap());
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//!?[^\r\n]*").unwrap());
static TEXT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[^\n*/\\"'`]+"#).unwrap());

/// Single-use scanner over one input string.
///
/// Holds only per-call state; construct a fresh one per invocation (or use
/// [`scan`](crate::lexer::scan)).
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
    in_block: bool,
    line: bool,
    block: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, options: &StripOptions) -> Self {
        Scanner {
            source,
            pos: 0,
            in_block: false,
            line: options.line,
            block: options.block,
        }
    }

    /// Consume the whole input, coalescing adjacent text tokens.
    pub fn run(mut self) -> Vec<Token<'src>> {
        let mut tokens: Vec<Token<'src>> = Vec::new();
        // byte offset where the most recently pushed token begins
        let mut last_start = 0;
        loop {
            let start = self.pos;
            let Some(token) = self.next_token() else {
                break;
            };
            if token.kind == TokenKind::Text {
                if let Some(last) = tokens.last_mut() {
                    if last.kind == TokenKind::Text {
                        last.raw = &self.source[last_start..self.pos];
                        continue;
                    }
                }
            }
            last_start = start;
            tokens.push(token);
        }
        tokens
    }

    fn next_token(&mut self) -> Option<Token<'src>> {
        if self.pos >= self.source.len() {
            return None;
        }
        let rest = &self.source[self.pos..];

        // escaped characters
        if let Some(m) = ESCAPED.find(rest) {
            return Some(Token::text(self.take(m.end())));
        }

        // quoted strings; block comment bodies scan as opaque text instead
        if !self.in_block {
            if let Some(m) = QUOTED.find(rest) {
                return Some(Token::quoted(self.take(m.end())));
            }
        }

        // newlines
        if let Some(m) = NEWLINE.find(rest) {
            return Some(Token::newline(self.take(m.end())));
        }

        // block comment open
        if self.block && !self.in_block {
            if let Some(m) = BLOCK_OPEN.find(rest) {
                // `/**/` is the two-character open plus `*/`, not a dangling `/**`
                let mut end = m.end();
                if m.as_str() == "/**" && rest[end..].starts_with('/') {
                    end = 2;
                }
                let raw = self.take(end);
                self.in_block = true;
                return Some(Token::block_open(raw, raw.ends_with('!')));
            }
        }

        // block comment close
        if self.in_block {
            if let Some(m) = BLOCK_CLOSE.find(rest) {
                let raw = self.take(m.end());
                self.in_block = false;
                let trailing_newline = raw.strip_prefix("*/").filter(|nl| !nl.is_empty());
                return Some(Token::block_close(raw, trailing_newline));
            }
        }

        // line comments
        if self.line && !self.in_block {
            if let Some(m) = LINE_COMMENT.find(rest) {
                let raw = self.take(m.end());
                return Some(Token::line_comment(raw, raw.starts_with("//!")));
            }
        }

        // plain text: longest marker-free run, or a single character
        if let Some(m) = TEXT_RUN.find(rest) {
            return Some(Token::text(self.take(m.end())));
        }
        rest.chars()
            .next()
            .map(|ch| Token::text(self.take(ch.len_utf8())))
    }

    fn take(&mut self, len: usize) -> &'src str {
        let start = self.pos;
        self.pos += len;
        &self.source[start..self.pos]
    }
}
