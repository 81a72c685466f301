// crates/remaplut-cli/src/cmd/gen.rs

use std::io::{BufRead, BufWriter, Write};

use anyhow::Context;
use clap::Args;
use tracing::info;

use remaplut_core::config::{DEFAULT_MAX_LINE_LEN, DEFAULT_TABLE_NAME};
use remaplut_core::stream::RunSummary;
use remaplut_core::{DirectiveParser, GenConfig, OutputWidth, RemapTable};

use crate::io::lut_file;

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Directive file (`##<remap>` and `0b<digits>` lines)
    #[arg(short, long)]
    pub r#in: String,

    /// Table file to write. Without it the entries go to stdout with no header/footer.
    #[arg(short, long)]
    pub out: Option<String>,

    /// Emitted bits per entry: 8/16/32/64
    #[arg(short, long, default_value_t = OutputWidth::W8)]
    pub width: OutputWidth,

    /// Remap applied before the first line is read, most significant output bit first.
    ///
    /// Every symbol counts (there is no terminator to drop), so up to 64 symbols
    /// are accepted.
    #[arg(short, long)]
    pub remap: Option<String>,

    /// Table identifier used in the header
    #[arg(short, long, default_value = DEFAULT_TABLE_NAME)]
    pub name: String,

    /// Longest line content kept; the rest of a longer line is ignored
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
    pub max_line: usize,
}

pub fn run(args: GenArgs) -> anyhow::Result<()> {
    let cfg = GenConfig {
        width: args.width,
        table_name: args.name.clone(),
        initial_remap: args.remap.clone(),
        max_line_len: args.max_line,
    };

    // Reject bad settings before any file is touched.
    cfg.validate()?;
    if let Some(spec) = cfg.initial_remap.as_deref() {
        RemapTable::new()
            .load_spec(spec.as_bytes())
            .with_context(|| format!("--remap {spec}"))?;
    }

    let input = lut_file::open_source(&args.r#in)?;

    let summary = match args.out.as_deref() {
        None => {
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let summary = generate(&cfg, input, &mut out, &args.r#in)?;
            out.flush()?;
            summary
        }
        Some(path) => {
            let mut out = lut_file::create_destination(path)?;
            lut_file::write_header(&mut out, path, &args.r#in, cfg.width, &cfg.table_name)
                .with_context(|| format!("write {path}"))?;
            let summary = generate(&cfg, input, &mut out, &args.r#in)?;
            lut_file::write_footer(&mut out).with_context(|| format!("write {path}"))?;
            out.flush().with_context(|| format!("flush {path}"))?;
            summary
        }
    };

    info!(
        input = %args.r#in,
        output = args.out.as_deref().unwrap_or("<stdout>"),
        width = %cfg.width,
        remaps = summary.remaps,
        entries = summary.literals,
        "table generated"
    );

    Ok(())
}

fn generate<R: BufRead, W: Write>(
    cfg: &GenConfig,
    input: R,
    out: W,
    source: &str,
) -> anyhow::Result<RunSummary> {
    let mut parser = DirectiveParser::new(cfg, out)?;
    let summary = parser
        .run(input)
        .with_context(|| format!("parse {source}"))?;
    Ok(summary)
}
