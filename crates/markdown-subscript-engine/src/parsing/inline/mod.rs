//! # Inline Parsing
//!
//! Cursor-based inline parsing with a configurable rule set.
//!
//! ## Architecture
//!
//! Inline parsing runs over the text of one paragraph at a time. An
//! [`InlineParser`] holds an ordered list of [`parser::InlineRule`]s; at each
//! byte the first rule whose trigger byte matches and which recognizes
//! something claims the input. Bytes nobody claims are text.
//!
//! Strikethrough is two-phase: the scan records tilde runs, then
//! [`delimiters::resolve`] pairs them once the paragraph is done. Subscripts
//! and code spans are finished as soon as they are recognized.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Strikethrough, Subscript)
//! - **`kinds`**: Inline-specific types with owned delimiters and scanners
//! - **`cursor`**: `Cursor` and `LineBuffer` for byte-level scanning
//! - **`delimiters`**: strikethrough run pairing
//! - **`parser`**: `InlineParser`, the built-in rules, and `parse_inline()`
//!
//! ## Precedence
//!
//! Code spans are raw zones: `` `H~2~O` `` parses as a single CodeSpan.
//! Between subscript and strikethrough, whichever rule is listed first gets
//! the first look at every tilde.

pub mod cursor;
pub mod delimiters;
pub mod kinds;
pub mod parser;
pub mod types;

pub use cursor::{Cursor, LineBuffer};
pub use parser::{
    CODE_SPAN_RULE, InlineParser, InlineRule, STRIKETHROUGH_RULE, SUBSCRIPT_RULE, parse_inline,
};
pub use types::{InlineNode, NodeKind, SubscriptNode, walk_mut};
