use std::fmt;
use std::future::Future;
use std::io;
use std::pin::Pin;

use crate::state::data_model::Row;

#[derive(Debug)]
pub enum SourceError {
    Io(io::Error),
    Parse(serde_json::Error),
    NotAnArray,
    NotArrayOfObjects,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "IO error: {e}"),
            SourceError::Parse(e) => write!(f, "JSON parse error: {e}"),
            SourceError::NotAnArray => write!(f, "sheet data is not an array"),
            SourceError::NotArrayOfObjects => {
                write!(f, "sheet array contains non-object elements")
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        SourceError::Io(e)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Parse(e)
    }
}

pub type FetchResult = Result<Vec<Row>, SourceError>;

pub type FetchFuture = Pin<Box<dyn Future<Output = FetchResult>>>;

/// External data-fetch collaborator. The wire format is the source's own
/// business; the sheet only requires zero-or-more row mappings or an error.
pub trait SheetSource {
    fn fetch(&self, sheet: &str, query: &str, labels: &[String]) -> FetchFuture;
}
