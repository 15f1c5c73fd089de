//! Emoji Catalog
//!
//! The catalog is built once from an external name/keyword dataset and is
//! read-only afterwards. The dataset is a JSON object mapping each emoji
//! symbol to either a bare name or a list whose first element is the name
//! and whose remaining elements are keywords:
//!
//! ```json
//! { "😀": ["grinning face", "happy", "smile"], "🐶": "dog face" }
//! ```
//!
//! That string-or-list shape is normalized here and never leaves this module.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::CatalogLoadError;

/// Sample dataset compiled into the binary, used when no dataset is configured
const BUNDLED_DATASET: &str = include_str!("../data/emoji.json");

/// One entry per emoji glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRecord {
    /// The emoji character itself
    pub symbol: String,
    /// Human-readable display label (non-empty)
    pub name: String,
    /// Auxiliary search terms, in dataset order
    pub keywords: Vec<String>,
}

impl EmojiRecord {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Ordered, immutable sequence of emoji records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<EmojiRecord>,
}

impl Catalog {
    /// Wrap an already-normalized record list
    pub fn from_records(records: Vec<EmojiRecord>) -> Self {
        Self { records }
    }

    /// Build from dataset JSON text
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let entries: DatasetEntries = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build from a reader yielding dataset JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let entries: DatasetEntries = serde_json::from_reader(reader)?;
        Self::from_entries(entries)
    }

    /// Load the dataset file at `path`
    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let file = File::open(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "Loaded {} emoji from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The sample dataset shipped with the binary
    pub fn bundled() -> Result<Self, CatalogLoadError> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    fn from_entries(entries: DatasetEntries) -> Result<Self, CatalogLoadError> {
        let records = entries
            .0
            .into_iter()
            .map(|(symbol, value)| normalize_entry(symbol, value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmojiRecord> {
        self.records.iter()
    }

    /// First record with exactly this symbol
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&EmojiRecord> {
        self.records.iter().find(|r| r.symbol == symbol)
    }

    /// First record whose name equals `name`, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&EmojiRecord> {
        let wanted = name.trim().to_lowercase();
        self.records
            .iter()
            .find(|r| r.name.to_lowercase() == wanted)
    }
}

/// Turn one raw `symbol -> value` dataset entry into a record
fn normalize_entry(symbol: String, value: Value) -> Result<EmojiRecord, CatalogLoadError> {
    if symbol.is_empty() {
        return Err(CatalogLoadError::invalid_entry(&symbol, "empty symbol"));
    }

    let (name, keywords) = match value {
        Value::String(name) => (name, Vec::new()),
        Value::Array(items) => {
            let mut strings = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => strings.push(s),
                    other => {
                        return Err(CatalogLoadError::invalid_entry(
                            &symbol,
                            format!("expected string in list, found {}", other),
                        ))
                    }
                }
            }
            if strings.is_empty() {
                return Err(CatalogLoadError::invalid_entry(&symbol, "empty name list"));
            }
            let name = strings.remove(0);
            (name, strings)
        }
        other => {
            return Err(CatalogLoadError::invalid_entry(
                &symbol,
                format!("expected a name or a list of names, found {}", other),
            ))
        }
    };

    if name.trim().is_empty() {
        return Err(CatalogLoadError::invalid_entry(&symbol, "empty name"));
    }

    Ok(EmojiRecord {
        symbol,
        name,
        keywords,
    })
}

/// Raw dataset entries in document order, duplicates included
struct DatasetEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for DatasetEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = DatasetEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of emoji symbols to a name or a list of names")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((symbol, value)) = map.next_entry::<String, Value>()? {
                    entries.push((symbol, value));
                }
                Ok(DatasetEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
