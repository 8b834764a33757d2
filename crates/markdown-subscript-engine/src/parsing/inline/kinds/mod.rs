//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Subscript`**: `TILDE = b'~'` - single-tilde span, plus its scanner
//! - **`Strikethrough`**: `TILDE = b'~'` - tilde delimiter runs of length 1 or 2
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `~` or `` ` ``.

pub mod code_span;
pub mod strikethrough;
pub mod subscript;

pub use code_span::CodeSpan;
pub use strikethrough::{DelimiterRun, Strikethrough};
pub use subscript::{NoMatch, Subscript, SubscriptMatch};
