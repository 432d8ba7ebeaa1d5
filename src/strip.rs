//! Public strip entry points
//!
//! [`strip`] honors an options record exactly as given; the four presets
//! fix the mode flags the way their names promise and carry the remaining
//! policy flags (`keep_protected`, `preserve_newlines`) through from the
//! caller's record.

use crate::compiler;
use crate::options::StripOptions;
use crate::parser;

/// Strip comments from `input` under the options exactly as given.
pub fn strip(input: &str, options: &StripOptions) -> String {
    match parser::parse(input, options) {
        Ok(tree) => compiler::compile(&tree, options),
        // the scanner never emits an unmatched close; if that ever changes,
        // return the input untouched instead of guessing
        Err(_) => input.to_string(),
    }
}

/// Remove both line and block comments.
pub fn strip_all(input: &str, options: &StripOptions) -> String {
    strip(
        input,
        &StripOptions {
            line: true,
            block: true,
            ..*options
        },
    )
}

/// Remove block comments only; `//` stays untouched.
pub fn strip_block(input: &str, options: &StripOptions) -> String {
    strip(
        input,
        &StripOptions {
            line: false,
            block: true,
            ..*options
        },
    )
}

/// Remove line comments only; `/* */` stays untouched.
pub fn strip_line(input: &str, options: &StripOptions) -> String {
    strip(
        input,
        &StripOptions {
            line: true,
            block: false,
            ..*options
        },
    )
}

/// Remove only the first eligible comment of either kind.
pub fn strip_first(input: &str, options: &StripOptions) -> String {
    strip(
        input,
        &StripOptions {
            line: true,
            block: true,
            first: true,
            ..*options
        },
    )
}
