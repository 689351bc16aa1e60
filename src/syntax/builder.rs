//! Green tree construction for parser adapters.
//!
//! An adapter that converts an external parser's output into this crate's CST
//! drives a [`TreeBuilder`] in source order. The builder tracks the running
//! text offset so adapters can record the range of every identifier they emit
//! (for example to fill a resolution table).

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::SyntaxNode;
use super::syntax_kind::SyntaxKind;

/// Incremental builder for a lossless Java syntax tree.
pub struct TreeBuilder {
    builder: GreenNodeBuilder<'static>,
    offset: TextSize,
    depth: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            offset: TextSize::from(0),
            depth: 0,
        }
    }

    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        self.builder.start_node(kind.into());
        self.depth += 1;
        self
    }

    pub fn finish_node(&mut self) -> &mut Self {
        self.builder.finish_node();
        self.depth -= 1;
        self
    }

    /// Append a token and return its range.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> TextRange {
        let range = TextRange::at(self.offset, TextSize::of(text));
        self.builder.token(kind.into(), text);
        self.offset = range.end();
        range
    }

    pub fn ident(&mut self, name: &str) -> TextRange {
        self.token(SyntaxKind::IDENT, name)
    }

    pub fn ws(&mut self) -> &mut Self {
        self.token(SyntaxKind::WHITESPACE, " ");
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.token(SyntaxKind::WHITESPACE, "\n");
        self
    }

    /// Current text offset (end of the last token).
    pub fn offset(&self) -> TextSize {
        self.offset
    }

    /// Number of nodes started but not yet finished.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn finish_green(self) -> GreenNode {
        self.builder.finish()
    }

    pub fn finish(self) -> SyntaxNode {
        SyntaxNode::new_root(self.finish_green())
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
