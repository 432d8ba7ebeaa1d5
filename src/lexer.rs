//! Lexer module for comment stripping
//!
//! This module turns raw source text into a flat token stream. The scanner
//! is deliberately not a full lexer for any host language: it only carves
//! the input into text, newlines, quoted strings, and comment markers —
//! just enough structure to tell a real comment from a comment-looking
//! substring inside a string literal.
//!
//! Tokens borrow their `raw` slice from the input, and concatenating every
//! `raw` in order reconstructs the input exactly. Everything downstream
//! (the tree builder and the compiler) relies on that reconstruction
//! guarantee to emit unmodified text byte-for-byte.

pub mod scanner;
pub mod tokens;

pub use scanner::Scanner;
pub use tokens::{Token, TokenKind};

use crate::options::StripOptions;

/// Scan source text into its token stream.
///
/// Which comment kinds are recognized is taken from `options.line` and
/// `options.block`; the remaining options do not affect scanning.
pub fn scan<'src>(source: &'src str, options: &StripOptions) -> Vec<Token<'src>> {
    Scanner::new(source, options).run()
}
