//! Tree builder for the comment stripper
//!
//! Converts the scanner's flat token stream into the [`Tree`] the compiler
//! walks. Block comments are assembled with a stack: a `BlockOpen` token
//! pushes a fresh container, its matching `BlockClose` pops it. Containers
//! still open when the input runs out are attached unclosed — no token is
//! ever dropped here.

use crate::ast::{CommentBlock, Node, ParseError, Tree};
use crate::lexer::{self, Token, TokenKind};
use crate::options::StripOptions;

/// Scan and build in one step: source text to comment tree.
pub fn parse<'src>(input: &'src str, options: &StripOptions) -> Result<Tree<'src>, ParseError> {
    build_tree(lexer::scan(input, options))
}

/// Assemble a token stream into a tree.
///
/// Streams produced by the scanner never trigger the error: a close token
/// is only emitted inside a block comment. Hand-built streams can, so the
/// stray-close case reports [`ParseError::UnexpectedBlockClose`] instead of
/// guessing at structure.
pub fn build_tree<'src>(tokens: Vec<Token<'src>>) -> Result<Tree<'src>, ParseError> {
    let mut root = Tree::default();
    let mut open: Vec<CommentBlock<'src>> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::BlockOpen => {
                let mut block = CommentBlock::new();
                block.push(Node::Leaf(token));
                open.push(block);
            }
            TokenKind::BlockClose => {
                let mut block = open.pop().ok_or(ParseError::UnexpectedBlockClose)?;
                block.push(Node::Leaf(token));
                block.closed = true;
                attach(&mut root, &mut open, Node::Comment(block));
            }
            _ => attach(&mut root, &mut open, Node::Leaf(token)),
        }
    }

    // input ended inside a block comment; keep the container with its text
    while let Some(block) = open.pop() {
        attach(&mut root, &mut open, Node::Comment(block));
    }

    Ok(root)
}

fn attach<'src>(root: &mut Tree<'src>, open: &mut Vec<CommentBlock<'src>>, node: Node<'src>) {
    match open.last_mut() {
        Some(block) => block.push(node),
        None => root.nodes.push(node),
    }
}
