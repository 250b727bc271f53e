//! Filing registry
//!
//! Holds every document record and the shelves they are filed on.
//! All mutation goes through `&mut self`, so a move or delete is never
//! observed half-done: a number is listed on at most one shelf, and every
//! listed number belongs to a known document.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::document::{Document, DocumentNumber, ShelfId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("document \"{0}\" not found")]
    NotFound(DocumentNumber),

    #[error("document \"{0}\" already exists")]
    DuplicateKey(DocumentNumber),
}

/// Shelf assumed by a seed that declares documents but no shelves
pub const DEFAULT_SHELF: &str = "1";

/// A shelf and the numbers filed on it, in filing order
#[derive(Debug, Clone, PartialEq, Eq)]
struct Shelf {
    id: ShelfId,
    documents: Vec<DocumentNumber>,
}

impl Shelf {
    fn new(id: ShelfId) -> Self {
        Self {
            id,
            documents: Vec::new(),
        }
    }

    fn contains(&self, number: &str) -> bool {
        self.documents.iter().any(|n| n.as_str() == number)
    }
}

/// Initial registry content, usually loaded from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub shelves: Vec<SeedShelf>,
    pub documents: Vec<Document>,
}

/// A seeded shelf and the document numbers filed on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedShelf {
    pub id: ShelfId,

    #[serde(default)]
    pub documents: Vec<DocumentNumber>,
}

/// In-memory store of shelves and documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    /// Shelves in creation order
    shelves: Vec<Shelf>,

    /// Documents in insertion order
    documents: Vec<Document>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from seed data
    ///
    /// Each document is filed on the first seeded shelf that lists its
    /// number, falling back to the first seeded shelf (or
    /// [`DEFAULT_SHELF`]) when none does. A shelf listing a number with no
    /// matching document is rejected with [`RegistryError::NotFound`].
    pub fn from_seed(seed: &Seed) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for shelf in &seed.shelves {
            registry.add_shelf(shelf.id.clone());
        }

        let fallback = seed
            .shelves
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_else(|| ShelfId::from(DEFAULT_SHELF));

        for doc in &seed.documents {
            let shelf = seed
                .shelves
                .iter()
                .find(|s| s.documents.contains(&doc.number))
                .map(|s| s.id.clone())
                .unwrap_or_else(|| fallback.clone());

            registry.add_document(
                doc.number.clone(),
                doc.doc_type.clone(),
                doc.holder.clone(),
                shelf,
            )?;
        }

        for shelf in &seed.shelves {
            if let Some(orphan) = shelf
                .documents
                .iter()
                .find(|n| !registry.document_exists(n.as_str()))
            {
                return Err(RegistryError::NotFound(orphan.clone()));
            }
        }

        Ok(registry)
    }

    /// Creates an empty shelf unless it already exists
    ///
    /// Returns the shelf id and whether it was newly created.
    pub fn add_shelf(&mut self, id: impl Into<ShelfId>) -> (ShelfId, bool) {
        let id = id.into();
        if self.shelf_index(id.as_str()).is_some() {
            return (id, false);
        }
        self.shelves.push(Shelf::new(id.clone()));
        (id, true)
    }

    /// Adds a document record and files it on `shelf`, creating the shelf if needed
    pub fn add_document(
        &mut self,
        number: impl Into<DocumentNumber>,
        doc_type: impl Into<String>,
        holder: impl Into<String>,
        shelf: impl Into<ShelfId>,
    ) -> Result<ShelfId, RegistryError> {
        let number = number.into();
        if self.document_exists(number.as_str()) {
            return Err(RegistryError::DuplicateKey(number));
        }

        let shelf = shelf.into();
        self.documents.push(Document::new(number.clone(), doc_type, holder));
        self.append_to_shelf(number, shelf.clone());
        Ok(shelf)
    }

    /// Returns true if a document with this number exists
    pub fn document_exists(&self, number: &str) -> bool {
        self.document(number).is_some()
    }

    /// Looks up a document by number
    pub fn document(&self, number: &str) -> Option<&Document> {
        let number = number.trim();
        self.documents.iter().find(|d| d.number.as_str() == number)
    }

    /// Returns the holder name of a document
    pub fn owner_of(&self, number: &str) -> Result<&str, RegistryError> {
        self.document(number)
            .map(|d| d.holder.as_str())
            .ok_or_else(|| RegistryError::NotFound(DocumentNumber::new(number)))
    }

    /// Returns the shelf a document number is filed on
    pub fn shelf_of(&self, number: &str) -> Result<&ShelfId, RegistryError> {
        let number = number.trim();
        self.shelves
            .iter()
            .find(|s| s.contains(number))
            .map(|s| &s.id)
            .ok_or_else(|| RegistryError::NotFound(DocumentNumber::new(number)))
    }

    /// Removes a number from whichever shelf lists it (no-op if none does)
    pub fn remove_from_shelf(&mut self, number: &str) {
        let number = number.trim();
        for shelf in &mut self.shelves {
            shelf.documents.retain(|n| n.as_str() != number);
        }
    }

    /// Files a number on `shelf` without touching other shelves
    ///
    /// Use [`Registry::move_document`] for a move; this only appends.
    pub fn append_to_shelf(
        &mut self,
        number: impl Into<DocumentNumber>,
        shelf: impl Into<ShelfId>,
    ) {
        let number = number.into();
        let shelf = shelf.into();

        let idx = match self.shelf_index(shelf.as_str()) {
            Some(idx) => idx,
            None => {
                self.shelves.push(Shelf::new(shelf));
                self.shelves.len() - 1
            }
        };

        let target = &mut self.shelves[idx];
        if !target.contains(number.as_str()) {
            target.documents.push(number);
        }
    }

    /// Moves a document to `new_shelf`, leaving it listed there only
    pub fn move_document(
        &mut self,
        number: &str,
        new_shelf: impl Into<ShelfId>,
    ) -> Result<(), RegistryError> {
        let number = self
            .document(number)
            .map(|d| d.number.clone())
            .ok_or_else(|| RegistryError::NotFound(DocumentNumber::new(number)))?;

        self.remove_from_shelf(number.as_str());
        self.append_to_shelf(number, new_shelf);
        Ok(())
    }

    /// Deletes a document and its shelf entry
    ///
    /// The shelf entry goes first, then the record. Returns the number and
    /// `false` without touching anything when the document does not exist.
    pub fn delete_document(&mut self, number: &str) -> (DocumentNumber, bool) {
        let number = number.trim();
        let Some(idx) = self.documents.iter().position(|d| d.number.as_str() == number) else {
            return (DocumentNumber::new(number), false);
        };

        self.remove_from_shelf(number);
        let removed = self.documents.remove(idx);
        (removed.number, true)
    }

    /// Distinct holder names across all documents, sorted
    pub fn all_owner_names(&self) -> BTreeSet<&str> {
        self.documents.iter().map(|d| d.holder.as_str()).collect()
    }

    /// Iterates over documents in insertion order
    pub fn list_documents(&self) -> impl Iterator<Item = &Document> + '_ {
        self.documents.iter()
    }

    /// Returns the numbers filed on a shelf, or `None` if the shelf does not exist
    pub fn shelf(&self, id: &str) -> Option<&[DocumentNumber]> {
        self.shelf_index(id).map(|idx| self.shelves[idx].documents.as_slice())
    }

    /// Iterates over shelves in creation order
    pub fn shelves(&self) -> impl Iterator<Item = (&ShelfId, &[DocumentNumber])> + '_ {
        self.shelves.iter().map(|s| (&s.id, s.documents.as_slice()))
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of shelves, empty ones included
    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    fn shelf_index(&self, id: &str) -> Option<usize> {
        let id = id.trim();
        self.shelves.iter().position(|s| s.id.as_str() == id)
    }
}
