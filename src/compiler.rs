//! Compiler from comment tree to output text
//!
//! Walks the tree left to right and emits every non-comment leaf verbatim.
//! Comments are dropped, kept when protected in safe mode, or kept once the
//! first eligible comment has been removed in first-only mode. A block
//! comment is decided once, as a whole; its children are never re-examined.
//!
//! The walk threads its "have we removed a comment yet" state through the
//! renderer struct explicitly, and the whole pass is a pure function of
//! (tree, options).

use crate::ast::{CommentBlock, Node, Tree};
use crate::lexer::{Token, TokenKind};
use crate::options::StripOptions;

/// Render a tree to output text under the given options.
///
/// Pair this with [`parse`](crate::parser::parse) called with the same
/// options; the scanner only emits comment tokens for the kinds the options
/// enable, so the compiler never needs to check them again.
pub fn compile(tree: &Tree<'_>, options: &StripOptions) -> String {
    Renderer::new(options).render(tree)
}

struct Renderer<'opts> {
    options: &'opts StripOptions,
    first_seen: bool,
}

impl<'opts> Renderer<'opts> {
    fn new(options: &'opts StripOptions) -> Self {
        Renderer {
            options,
            first_seen: false,
        }
    }

    fn render(mut self, tree: &Tree<'_>) -> String {
        let mut out = String::new();
        for node in &tree.nodes {
            self.render_node(node, &mut out);
        }
        out
    }

    fn render_node(&mut self, node: &Node<'_>, out: &mut String) {
        match node {
            Node::Leaf(token) if token.kind == TokenKind::LineComment => {
                self.render_line_comment(token, out)
            }
            Node::Leaf(token) => out.push_str(token.raw),
            Node::Comment(block) => self.render_block_comment(block, out),
        }
    }

    fn render_line_comment(&mut self, token: &Token<'_>, out: &mut String) {
        if self.options.first && self.first_seen {
            out.push_str(token.raw);
            return;
        }
        if self.options.keep_protected && token.protected {
            out.push_str(token.raw);
            return;
        }
        self.first_seen = true;
    }

    fn render_block_comment(&mut self, block: &CommentBlock<'_>, out: &mut String) {
        if !block.closed {
            // unterminated comment: fail open and keep the text
            block.write_source(out);
            return;
        }
        if self.options.first && self.first_seen {
            block.write_source(out);
            return;
        }
        if self.options.keep_protected && block.is_protected() {
            block.write_source(out);
            return;
        }
        self.first_seen = true;
        if self.options.preserve_newlines {
            out.push_str(&"\n".repeat(block.newline_count()));
        }
    }
}
