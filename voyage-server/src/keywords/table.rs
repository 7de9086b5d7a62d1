//! Alias lookup for voyage filter keys.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::loader::KeywordFile;

/// Result of looking up a single filter token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The token is an alias standing for these identifiers.
    Alias(&'a BTreeSet<String>),

    /// The token is not an alias and is taken as an identifier itself.
    Verbatim(&'a str),
}

/// Mapping from alias names to the voyage identifiers they stand for.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, BTreeSet<String>>,
}

impl AliasTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a parsed keyword file.
    ///
    /// A name listed twice keeps the routes of its last entry.
    pub fn from_file_data(file: KeywordFile) -> Self {
        let mut table = Self::new();
        for keyword in file.keywords {
            table.insert(keyword.name, keyword.routes);
        }
        table
    }

    /// Add or replace an alias.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        identifiers: impl IntoIterator<Item = impl Into<String>>,
    ) {
        let identifiers = identifiers.into_iter().map(Into::into).collect();
        self.aliases.insert(name.into(), identifiers);
    }

    /// Identifiers an alias stands for, if `name` is an alias.
    pub fn get(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.aliases.get(name)
    }

    /// Classify a single filter token.
    pub fn lookup<'a>(&'a self, token: &'a str) -> Resolution<'a> {
        match self.aliases.get(token) {
            Some(identifiers) => Resolution::Alias(identifiers),
            None => Resolution::Verbatim(token),
        }
    }

    /// Expand filter tokens into the set of voyage identifiers they denote.
    ///
    /// Aliases are replaced by their identifiers; any other token is kept
    /// verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use voyage_server::keywords::AliasTable;
    ///
    /// let mut table = AliasTable::new();
    /// table.insert("Bloodbrine", ["dayBloodbrine", "sunsetBloodbrine", "nightBloodbrine"]);
    ///
    /// let ids = table.resolve(["Bloodbrine", "dayRhotano"]);
    /// assert_eq!(ids.len(), 4);
    /// assert!(ids.contains("nightBloodbrine"));
    /// assert!(ids.contains("dayRhotano"));
    /// assert!(!ids.contains("Bloodbrine"));
    /// ```
    pub fn resolve<I, S>(&self, tokens: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = HashSet::new();
        for token in tokens {
            match self.lookup(token.as_ref()) {
                Resolution::Alias(identifiers) => resolved.extend(identifiers.iter().cloned()),
                Resolution::Verbatim(identifier) => {
                    resolved.insert(identifier.to_string());
                }
            }
        }
        resolved
    }

    /// Alias names and their identifiers, sorted by name.
    pub fn entries(&self) -> Vec<(&str, &BTreeSet<String>)> {
        let mut entries: Vec<_> = self
            .aliases
            .iter()
            .map(|(name, ids)| (name.as_str(), ids))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if there are no aliases.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
