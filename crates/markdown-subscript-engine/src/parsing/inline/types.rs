use crate::{
    attributes::Attributes,
    parsing::{inline::kinds::SubscriptMatch, rope::span::Span},
};

/// Discriminates the inline node variants; renderers are registered per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    CodeSpan,
    Strikethrough,
    Subscript,
}

/// A parsed inline node with byte spans into the rope.
///
/// All variants store spans rather than text, enabling lossless round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// `~~text~~` or `~text~`, possibly containing other inline nodes.
    Strikethrough {
        /// Full span including both delimiter runs.
        full: Span,
        /// Span between the delimiter runs.
        inner: Span,
        children: Vec<InlineNode>,
    },
    /// `~text~` where the text has no whitespace.
    Subscript(SubscriptNode),
}

impl InlineNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            InlineNode::Text(_) => NodeKind::Text,
            InlineNode::CodeSpan { .. } => NodeKind::CodeSpan,
            InlineNode::Strikethrough { .. } => NodeKind::Strikethrough,
            InlineNode::Subscript(_) => NodeKind::Subscript,
        }
    }

    /// The full span of the node, delimiters included.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } => *full,
            InlineNode::Strikethrough { full, .. } => *full,
            InlineNode::Subscript(sub) => sub.full(),
        }
    }

    pub fn children(&self) -> &[InlineNode] {
        match self {
            InlineNode::Text(_) | InlineNode::CodeSpan { .. } => &[],
            InlineNode::Strikethrough { children, .. } => children,
            InlineNode::Subscript(sub) => sub.children(),
        }
    }

    fn children_mut(&mut self) -> &mut [InlineNode] {
        match self {
            InlineNode::Strikethrough { children, .. } => children,
            _ => &mut [],
        }
    }
}

/// A subscript node: one literal text child and optional output attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptNode {
    full: Span,
    content: Span,
    text: Box<InlineNode>,
    attributes: Option<Attributes>,
}

impl SubscriptNode {
    /// Builds the node for an absolute match.
    pub fn new(m: SubscriptMatch) -> Self {
        Self {
            full: m.full(),
            content: m.content,
            text: Box::new(InlineNode::Text(m.content)),
            attributes: None,
        }
    }

    /// Span including both tildes.
    pub fn full(&self) -> Span {
        self.full
    }

    /// Span between the tildes.
    pub fn content(&self) -> Span {
        self.content
    }

    /// Always exactly one `Text` node covering [`SubscriptNode::content`].
    pub fn children(&self) -> &[InlineNode] {
        std::slice::from_ref(&*self.text)
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .set(name, value);
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

/// Visits every node depth-first, parents before children.
pub fn walk_mut(nodes: &mut [InlineNode], f: &mut impl FnMut(&mut InlineNode)) {
    for node in nodes {
        f(node);
        walk_mut(node.children_mut(), f);
    }
}
