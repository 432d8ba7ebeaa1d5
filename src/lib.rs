//! # decomment
//!
//! Strips line (`//`) and block (`/* */`) comments from source text while
//! leaving quoted strings, regex-ish literals, and glob patterns untouched.
//!
//! A naive search-and-replace corrupts code whose string literals contain
//! `//` or `/*` (URLs, globs such as `./a/**/*.js`, escaped slashes). This
//! crate instead scans the input into a token stream, assembles block
//! comments into a small tree, and re-emits everything that is not a
//! comment byte-for-byte:
//!
//! raw text → [lexer] → tokens → [parser] → tree → [compiler] → output
//!
//! The usual entry points are [`strip_all`], [`strip_block`], [`strip_line`]
//! and [`strip_first`]; [`strip`] honors a [`StripOptions`] record verbatim
//! for other combinations. All of them are total over `&str`: malformed
//! input (unterminated strings or block comments) falls open and comes back
//! untouched rather than truncated.

pub mod ast;
pub mod compiler;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod processor;
pub mod strip;

pub use compiler::compile;
pub use options::StripOptions;
pub use parser::parse;
pub use strip::{strip, strip_all, strip_block, strip_first, strip_line};
