pub mod attributes;
pub mod extension;
pub mod markdown;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use attributes::{AttributeFilter, Attributes};
pub use extension::{StrikethroughExtension, SubscriptExtension};
pub use markdown::{Extender, Markdown, Prioritized};
pub use parsing::{ParsedDoc, parse_document};
