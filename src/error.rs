use std::{
    io,
    num::{ParseFloatError, ParseIntError},
    path::PathBuf,
};
use thiserror::Error;

pub type ConvResult<T> = std::result::Result<T, ConvError>;

#[derive(Debug, Error)]
pub enum ConvError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),
    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),
    #[error("Expected at least {expected} tab-separated fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
    #[error("Invalid integer in column {column}: {value:?}")]
    InvalidInteger { column: &'static str, value: String },
    #[error("Invalid strand {value:?}, expected '+' or '-'")]
    InvalidStrand { value: String },
    #[error("SVTYPE missing from INFO at variant ID {id}")]
    MissingSvtype { id: String },
    #[error("Both mate INFO columns are MISSING at variant ID {id}")]
    BothMatesMissing { id: String },
    #[error("Breakend position out of range: start {start} with confidence offset {offset}")]
    PositionOutOfRange { start: i64, offset: i64 },
    #[error("Invalid gzip header: {}", path.display())]
    InvalidGzipHeader { path: PathBuf },
    #[error("VCF files differ in length: {} ended before the master file", path.display())]
    LengthMismatch { path: PathBuf },
    #[error("Error at input line {line_number}: {source}")]
    InputLine {
        line_number: usize,
        #[source]
        source: Box<ConvError>,
    },
}

impl ConvError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub fn at_line(self, line_number: usize) -> Self {
        Self::InputLine {
            line_number,
            source: Box::new(self),
        }
    }

    /// True when the failure is the downstream consumer closing the output stream.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Io(error) => error.kind() == io::ErrorKind::BrokenPipe,
            Self::InputLine { source, .. } => source.is_broken_pipe(),
            _ => false,
        }
    }
}

#[macro_export]
macro_rules! conv_error {
    ($($arg:tt)*) => {
        $crate::error::ConvError::message(format!($($arg)*))
    };
}
