//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`dump`**: Renders a parsed document as an indented text tree of node
//!   kinds, spans and source previews, stable enough for `insta` snapshots
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   child spans contained in parents, subscript content shape)
//!
//! The CLI reuses `dump` for `--emit tree`.

pub mod dump;
pub mod invariants;

pub use dump::dump;
pub use invariants::check as invariants;
