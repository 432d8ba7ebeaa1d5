//! Node types for the comment tree
//!
//! A [`Tree`] owns an ordered sequence of nodes; each node is either a leaf
//! wrapping one token or a [`CommentBlock`] container holding everything
//! between a block comment's open and close markers (markers included).
//! The root is its own type rather than a container kind, so it can never
//! be protected and never be omitted.

use crate::lexer::Token;

/// One element of the tree: a plain token, or a whole block comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'src> {
    Leaf(Token<'src>),
    Comment(CommentBlock<'src>),
}

impl<'src> Node<'src> {
    /// Append this node's exact source text to `out`.
    pub fn write_source(&self, out: &mut String) {
        match self {
            Node::Leaf(token) => out.push_str(token.raw),
            Node::Comment(block) => block.write_source(out),
        }
    }

    /// Number of newline characters this node spans.
    pub fn newline_count(&self) -> usize {
        match self {
            Node::Leaf(token) => token.raw.matches('\n').count(),
            Node::Comment(block) => block.newline_count(),
        }
    }
}

/// A block comment container. Owns its children exclusively; the first
/// child is always the `BlockOpen` leaf.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentBlock<'src> {
    pub nodes: Vec<Node<'src>>,
    /// False when the input ended before a matching `*/` was found.
    pub closed: bool,
}

impl<'src> CommentBlock<'src> {
    pub fn new() -> Self {
        CommentBlock::default()
    }

    pub fn push(&mut self, node: Node<'src>) {
        self.nodes.push(node);
    }

    /// A block is protected when its opening marker carried the `!` flag.
    pub fn is_protected(&self) -> bool {
        matches!(self.nodes.first(), Some(Node::Leaf(token)) if token.protected)
    }

    pub fn write_source(&self, out: &mut String) {
        for node in &self.nodes {
            node.write_source(out);
        }
    }

    pub fn newline_count(&self) -> usize {
        self.nodes.iter().map(Node::newline_count).sum()
    }
}

/// The root of a parsed input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree<'src> {
    pub nodes: Vec<Node<'src>>,
}

impl<'src> Tree<'src> {
    /// Reassemble the original input from the tree.
    pub fn source(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_source(&mut out);
        }
        out
    }
}
