//! Tree representation of scanned source
//!
//! The tree is shallow on purpose: plain tokens stay leaves, and only block
//! comments become containers so the compiler can decide their fate in one
//! place. This is a comment/string/text partition of the input, not an AST
//! of the host language.

pub mod error;
pub mod node;

pub use error::ParseError;
pub use node::{CommentBlock, Node, Tree};
