use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "markdown-subscript")]
#[command(author, version)]
#[command(about = "Convert Markdown with ~subscript~ and ~~strikethrough~~ to HTML")]
#[command(after_help = "\
EXAMPLES:

    # Convert a file to stdout
    markdown-subscript notes.md

    # Convert from stdin
    echo 'H~2~O' | markdown-subscript

    # Show the parsed tree instead of HTML
    markdown-subscript --emit tree notes.md

CONFIGURATION:

Without --config, ~/.config/markdown-subscript/config.toml is read if it exists:

    [extensions]
    subscript = true
    strikethrough = true

    [subscript]
    class = \"chem\"")]
pub struct Cli {
    /// Markdown file to read; stdin when omitted
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// What to write
    #[arg(long, value_enum, default_value_t = Emit::Html)]
    pub emit: Emit,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Rendered HTML
    Html,
    /// Indented node tree with spans
    Tree,
}
