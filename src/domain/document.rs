//! Document records and the identifiers used to file them
//!
//! Identifiers are free-form labels: document numbers such as `2207 876234`
//! or `11-2`, shelf labels such as `1` or `TESTSHELF-1`. Surrounding
//! whitespace is trimmed, inner whitespace is part of the label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique number of a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DocumentNumber(String);

impl DocumentNumber {
    pub fn new(number: impl AsRef<str>) -> Self {
        Self(number.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DocumentNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<DocumentNumber> for String {
    fn from(number: DocumentNumber) -> Self {
        number.0
    }
}

/// Label of a shelf
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ShelfId(String);

impl ShelfId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShelfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShelfId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ShelfId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<ShelfId> for String {
    fn from(id: ShelfId) -> Self {
        id.0
    }
}

/// A filed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Kind of document (passport, invoice, ...)
    #[serde(rename = "type")]
    pub doc_type: String,

    pub number: DocumentNumber,

    /// Name of the person holding the document
    pub holder: String,
}

impl Document {
    pub fn new(
        number: impl Into<DocumentNumber>,
        doc_type: impl Into<String>,
        holder: impl Into<String>,
    ) -> Self {
        Self {
            doc_type: doc_type.into(),
            number: number.into(),
            holder: holder.into(),
        }
    }
}

impl fmt::Display for Document {
    /// Renders the listing line: `type "number" "holder"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\" \"{}\"", self.doc_type, self.number, self.holder)
    }
}
