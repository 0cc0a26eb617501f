use std::fs;
use std::future;
use std::path::Path;

use serde_json::Value;

use crate::io::source::{FetchFuture, SheetSource, SourceError};
use crate::state::data_model::Row;

/// Sheet source backed by a local JSON array-of-objects file. The `sheet`
/// option is interpreted as a filesystem path; `query` is not meaningful
/// for file data and is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFileSource;

impl JsonFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl SheetSource for JsonFileSource {
    fn fetch(&self, sheet: &str, _query: &str, _labels: &[String]) -> FetchFuture {
        let result = load_rows(Path::new(sheet));
        Box::pin(future::ready(result))
    }
}

pub fn load_rows(path: &Path) -> Result<Vec<Row>, SourceError> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    match value {
        Value::Array(items) => {
            let mut rows = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(map) => {
                        rows.push(map.into_iter().map(|(k, v)| (k, cell_text(&v))).collect());
                    }
                    _ => return Err(SourceError::NotArrayOfObjects),
                }
            }
            Ok(rows)
        }
        _ => Err(SourceError::NotAnArray),
    }
}

/// Formats a JSON value as cell text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
