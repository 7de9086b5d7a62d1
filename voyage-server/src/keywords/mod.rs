//! Filter keyword aliases.
//!
//! Users filter voyages by keyword. A keyword is either a voyage identifier
//! such as `sunsetMerlthor` or an alias from the keyword file that stands for
//! several identifiers (e.g. `Merlthor` for every time of day on that route).

mod error;
mod loader;
mod table;

pub use error::KeywordError;
pub use loader::{
    DEFAULT_KEYWORDS_PATH, KeywordFile, RouteKeyword, load_keywords, parse_keywords,
};
pub use table::{AliasTable, Resolution};
