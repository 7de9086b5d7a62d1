//! Keyword file format and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::KeywordError;
use super::table::AliasTable;

/// Default location of the keyword file, relative to the working directory.
pub const DEFAULT_KEYWORDS_PATH: &str = "data/route_keywords.json";

/// Top-level shape of the keyword file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFile {
    pub keywords: Vec<RouteKeyword>,
}

/// One alias entry in the keyword file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteKeyword {
    /// Alias name users filter by.
    pub name: String,

    /// Voyage identifiers the alias stands for.
    pub routes: Vec<String>,
}

/// Parse keyword file contents.
pub fn parse_keywords(json: &str) -> Result<AliasTable, KeywordError> {
    let file: KeywordFile = serde_json::from_str(json)?;
    Ok(AliasTable::from_file_data(file))
}

/// Read and parse the keyword file at `path`.
pub fn load_keywords(path: impl AsRef<Path>) -> Result<AliasTable, KeywordError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| KeywordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_keywords(&contents)
}
