// crates/remaplut-cli/src/cmd/apply.rs

use std::io::Write;

use anyhow::Context;
use clap::Args;

use remaplut_core::literal::{format_literal, parse_binary_run, BINARY_PREFIX};
use remaplut_core::{OutputWidth, RemapTable};

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Remap, most significant output bit first (every symbol counts)
    #[arg(short, long)]
    pub remap: String,

    /// Emitted bits per value: 8/16/32/64
    #[arg(short, long, default_value_t = OutputWidth::W8)]
    pub width: OutputWidth,

    /// Values to remap, as `0b0101` or `0101`
    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn run(args: ApplyArgs) -> anyhow::Result<()> {
    let mut table = RemapTable::new();
    table
        .load_spec(args.remap.as_bytes())
        .with_context(|| format!("--remap {}", args.remap))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", table.echo(args.width))?;

    for raw in &args.values {
        let v = parse_value(raw)?;
        writeln!(out, "{}", format_literal(table.apply(v), args.width))?;
    }

    Ok(())
}

fn parse_value(raw: &str) -> anyhow::Result<u64> {
    let digits = raw.strip_prefix(BINARY_PREFIX).unwrap_or(raw).as_bytes();
    let (v, n) = parse_binary_run(digits);
    if n == 0 || n != digits.len() {
        anyhow::bail!("not a binary literal: {raw:?}");
    }
    Ok(v)
}
