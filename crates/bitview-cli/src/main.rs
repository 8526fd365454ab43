//! `bitview`: render a register value through a JSON layout.
//!
//! Rendered output goes to stdout, unresolved enum lookups to stderr.
//! Set `RUST_LOG=bitview=trace` to follow the render field by field.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use bitview::{Layout, Style, layout::parse_number, serde::LayoutDef};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bitview", about = "Render a register value through a JSON layout")]
struct Args {
    /// JSON layout file describing the register.
    #[arg(long, short)]
    layout: PathBuf,

    /// Output style: horizontal (h) or vertical (v). Defaults to the
    /// layout's own style.
    #[arg(long, short)]
    style: Option<Style>,

    /// Update a field before rendering, as NAME=VALUE. VALUE is an enum name
    /// or a number. May be repeated; updates apply in order.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    updates: Vec<String>,

    /// Value to render: decimal, 0x hexadecimal or 0b binary.
    value: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let layout = load_layout(&args.layout)?;

    let mut value = parse_number(&args.value)
        .ok_or_else(|| anyhow!("'{}' is not a number", args.value))?;

    for update in &args.updates {
        let (name, text) = update
            .split_once('=')
            .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{}'", update))?;
        value = layout.set(value, name.trim(), text.trim())?;
        tracing::debug!(field = name, value, "applied update");
    }

    let style = args.style.unwrap_or(layout.style());
    let rendered = layout.presenter(value, style).render();

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.primary.as_bytes())?;
    if !rendered.primary.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }

    io::stderr().write_all(rendered.diagnostics.as_bytes())?;
    Ok(())
}

fn load_layout(path: &Path) -> Result<Layout> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout {}", path.display()))?;
    let def: LayoutDef = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse layout {}", path.display()))?;
    let layout = Layout::try_from(def)?;
    tracing::debug!(
        path = %path.display(),
        width = layout.width(),
        fields = layout.fields().len(),
        "loaded layout"
    );
    Ok(layout)
}
