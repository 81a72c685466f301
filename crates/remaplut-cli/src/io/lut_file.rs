// crates/remaplut-cli/src/io/lut_file.rs

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use remaplut_core::{OutputWidth, RemapError};

/// Open the directive file for reading.
pub fn open_source(path: &str) -> Result<BufReader<File>, RemapError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| RemapError::SourceOpen {
            path: path.to_string(),
            source,
        })
}

/// Create (truncate) the destination table file.
pub fn create_destination(path: &str) -> Result<BufWriter<File>, RemapError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| RemapError::DestinationOpen {
            path: path.to_string(),
            source,
        })
}

/// Preamble of a named table file, up to and including the opening brace.
pub fn write_header<W: Write>(
    out: &mut W,
    destination: &str,
    source: &str,
    width: OutputWidth,
    table_name: &str,
) -> io::Result<()> {
    writeln!(out, "/* {destination}")?;
    writeln!(out, " *")?;
    writeln!(out, " * Generated from {source}")?;
    writeln!(out, "*")?;
    writeln!(out)?;
    writeln!(out, "const uint{width}_t {table_name}[] = {{")?;
    Ok(())
}

pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "}};")
}
