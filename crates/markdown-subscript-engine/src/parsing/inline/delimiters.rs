//! Pairing of strikethrough delimiter runs.
//!
//! The scan loop leaves a flat list of finished nodes and unpaired tilde
//! runs. [`resolve`] walks the closers left to right and pairs each with the
//! nearest earlier opener of the same length, turning everything between
//! them into the children of a `Strikethrough` node. Runs that never pair
//! become literal text.

use crate::parsing::rope::span::Span;

use super::{kinds::DelimiterRun, types::InlineNode};

/// One entry of the scan output before delimiters are paired.
#[derive(Debug, Clone)]
pub enum Piece {
    Node(InlineNode),
    Delimiter(DelimiterRun),
}

impl Piece {
    fn into_node(self) -> InlineNode {
        match self {
            Piece::Node(node) => node,
            Piece::Delimiter(run) => InlineNode::Text(run.span),
        }
    }

    fn as_delimiter(&self) -> Option<&DelimiterRun> {
        match self {
            Piece::Delimiter(run) => Some(run),
            Piece::Node(_) => None,
        }
    }
}

/// Pairs delimiter runs and returns the final node list with adjacent text
/// merged.
pub fn resolve(mut pieces: Vec<Piece>) -> Vec<InlineNode> {
    let mut i = 0;
    while i < pieces.len() {
        let Some(closer) = pieces[i].as_delimiter().copied() else {
            i += 1;
            continue;
        };
        if !closer.can_close {
            i += 1;
            continue;
        }

        // Openers of another length are skipped, not consumed.
        let opener = (0..i).rev().find_map(|j| {
            pieces[j]
                .as_delimiter()
                .filter(|run| run.can_open && run.len() == closer.len())
                .map(|run| (j, *run))
        });
        let Some((j, opener)) = opener else {
            i += 1;
            continue;
        };

        let inner: Vec<Piece> = pieces.drain(j + 1..i).collect();
        let node = InlineNode::Strikethrough {
            full: Span::new(opener.span.start, closer.span.end),
            inner: Span::new(opener.span.end, closer.span.start),
            children: coalesce(inner.into_iter().map(Piece::into_node)),
        };
        pieces.splice(j..=j + 1, [Piece::Node(node)]);
        i = j + 1;
    }

    coalesce(pieces.into_iter().map(Piece::into_node))
}

/// Merges touching `Text` nodes into one.
fn coalesce(nodes: impl IntoIterator<Item = InlineNode>) -> Vec<InlineNode> {
    let mut out: Vec<InlineNode> = Vec::new();
    for node in nodes {
        if let (Some(InlineNode::Text(prev)), InlineNode::Text(next)) = (out.last_mut(), &node)
            && prev.end == next.start
        {
            prev.end = next.end;
            continue;
        }
        out.push(node);
    }
    out
}
