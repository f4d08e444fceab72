use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const KEY_SEPARATOR: char = '$';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid document key: {0:?}")]
    InvalidFormat(String),
}

/// DocumentKey identifies a document within a collection.
///
/// The combined textual form is `<collection>$<document>` with exactly one
/// separator; it round-trips through [`FromStr`] and [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    collection: String,
    document: String,
}

impl DocumentKey {
    pub fn new(collection: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            document: document.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn document(&self) -> &str {
        &self.document
    }
}

impl FromStr for DocumentKey {
    type Err = KeyError;

    fn from_str(combined: &str) -> Result<Self, Self::Err> {
        let mut parts = combined.split(KEY_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(collection), Some(document), None) => Ok(Self::new(collection, document)),
            _ => Err(KeyError::InvalidFormat(combined.to_string())),
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.collection, KEY_SEPARATOR, self.document)
    }
}
