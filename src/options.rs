//! Configuration for the strip pipeline
//!
//! One explicit record controls every policy decision: which comment kinds
//! the scanner recognizes, whether protected comments survive, whether
//! stripped block comments leave blank lines behind, and whether only the
//! first eligible comment is removed. The record is plain data; it is read
//! by the scanner and the compiler but never mutated by them.

use serde::{Deserialize, Serialize};

/// Options accepted by [`strip`](crate::strip::strip) and friends.
///
/// Serializes with camelCase field names; `safe` is accepted as an alias
/// for `keepProtected` when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StripOptions {
    /// Recognize `//` line comments.
    pub line: bool,
    /// Recognize `/* */` block comments.
    pub block: bool,
    /// Keep comments whose first character after the marker is `!`.
    #[serde(alias = "safe")]
    pub keep_protected: bool,
    /// Replace each stripped block comment with as many bare newlines as it
    /// spanned, so line numbers below it stay stable.
    pub preserve_newlines: bool,
    /// Remove only the first eligible comment; emit the rest verbatim.
    pub first: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        StripOptions {
            line: true,
            block: true,
            keep_protected: false,
            preserve_newlines: false,
            first: false,
        }
    }
}

impl StripOptions {
    /// Both comment kinds active (the default).
    pub fn all() -> Self {
        StripOptions::default()
    }

    /// Line comments only; block markers scan as plain text.
    pub fn line_only() -> Self {
        StripOptions {
            block: false,
            ..StripOptions::default()
        }
    }

    /// Block comments only; `//` scans as plain text.
    pub fn block_only() -> Self {
        StripOptions {
            line: false,
            ..StripOptions::default()
        }
    }

    /// Both kinds active, removing only the first eligible comment.
    pub fn first_only() -> Self {
        StripOptions {
            first: true,
            ..StripOptions::default()
        }
    }

    /// Set whether protected (`/*!`, `//!`) comments are kept.
    pub fn safe(mut self, keep_protected: bool) -> Self {
        self.keep_protected = keep_protected;
        self
    }

    /// Set whether stripped block comments leave their newlines behind.
    pub fn preserve_newlines(mut self, preserve: bool) -> Self {
        self.preserve_newlines = preserve;
        self
    }
}
