//! Extensions that teach the host about tildes.
//!
//! Subscript registers at a lower priority than strikethrough so the
//! single-tilde scanner always sees a `~` first. A position it rejects
//! falls through to strikethrough, and after that to plain text.

use crate::{
    markdown::{Extender, Markdown},
    parsing::inline::{STRIKETHROUGH_RULE, SUBSCRIPT_RULE},
    render::{STRIKETHROUGH_RENDERER, SUBSCRIPT_RENDERER},
};

/// `H~2~O` → `H<sub>2</sub>O`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscriptExtension;

impl SubscriptExtension {
    pub const PRIORITY: u16 = 100;
}

impl Extender for SubscriptExtension {
    fn extend(&self, md: &mut Markdown) {
        md.add_inline_rule(SUBSCRIPT_RULE, Self::PRIORITY);
        md.add_renderer(SUBSCRIPT_RENDERER, Self::PRIORITY);
    }
}

/// `~~del~~` and `~del~` → `<del>del</del>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrikethroughExtension;

impl StrikethroughExtension {
    pub const PRIORITY: u16 = 500;
}

impl Extender for StrikethroughExtension {
    fn extend(&self, md: &mut Markdown) {
        md.add_inline_rule(STRIKETHROUGH_RULE, Self::PRIORITY);
        md.add_renderer(STRIKETHROUGH_RENDERER, Self::PRIORITY);
    }
}
