// crates/remaplut-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RemapError>;

#[derive(Debug, Error)]
pub enum RemapError {
    #[error("remapping string contains too few characters")]
    TooShort,

    #[error("remapping string contains >64 characters (got {len})")]
    TooLong { len: usize },

    #[error("invalid map character '{}'", printable(.symbol))]
    InvalidSymbol { symbol: u8 },

    #[error("invalid output width {0:?}: expected 8/16/32/64")]
    InvalidWidth(String),

    #[error("invalid table name {0:?}: expected a C identifier")]
    InvalidTableName(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unable to open {path}")]
    SourceOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to open {path}")]
    DestinationOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("bad remapping data on line {line}")]
    RemapDirective {
        line: u32,
        #[source]
        source: Box<RemapError>,
    },

    #[error("parser halted after failure on line {line}")]
    ParserHalted { line: u32 },

    #[error("parser already finished its input")]
    ParserFinished,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RemapError {
    /// 1-based input line of a failed remap directive, if this is one.
    pub fn line(&self) -> Option<u32> {
        match self {
            RemapError::RemapDirective { line, .. } | RemapError::ParserHalted { line } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

fn printable(symbol: &u8) -> String {
    char::from(*symbol).escape_default().to_string()
}
