use anyhow::{Context, Result, bail};
use markdown_subscript_config::Config;
use markdown_subscript_engine::{
    Markdown, StrikethroughExtension, SubscriptExtension,
    markdown::Extender,
    parsing::{inline::InlineNode, inline::walk_mut, snapshot},
};
use std::{
    io::{Read, Write},
    path::Path,
};
use xi_rope::Rope;

use crate::cli::{Cli, Emit};

/// Resolves the config to use: the explicit path must exist, the default
/// path may be absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        let config = Config::load()?;
        if config.is_none() {
            log::debug!("no config at {}, using defaults", Config::config_path().display());
        }
        return Ok(config.unwrap_or_default());
    };

    let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
    match Config::load_from_path(&path)? {
        Some(config) => {
            log::debug!("using config from {}", path.display());
            Ok(config)
        }
        None => bail!("config file {} does not exist", path.display()),
    }
}

pub fn build_markdown(config: &Config) -> Markdown {
    let mut extensions: Vec<&dyn Extender> = vec![];
    if config.extensions.subscript {
        extensions.push(&SubscriptExtension);
    }
    if config.extensions.strikethrough {
        extensions.push(&StrikethroughExtension);
    }
    Markdown::new().with_extensions(extensions)
}

/// Converts `src` according to `config`.
pub fn convert(config: &Config, src: &str, emit: Emit) -> String {
    let md = build_markdown(config);
    let rope = Rope::from(src);
    let mut doc = md.parse(&rope);

    if let Some(class) = &config.subscript.class {
        for p in &mut doc.paragraphs {
            walk_mut(&mut p.inlines, &mut |node| {
                if let InlineNode::Subscript(sub) = node {
                    sub.set_attribute("class", class.as_str());
                }
            });
        }
    }

    match emit {
        Emit::Html => md.render(&rope, &doc),
        Emit::Tree => snapshot::dump(&rope, &doc),
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let output = convert(&config, &input, cli.emit);

    match &cli.output {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(output.as_bytes())
            .context("Failed to write stdout")?,
    }
    Ok(())
}
