//! Domain models for docshelf
//!
//! Contains the filing registry without any I/O concerns.

mod document;
mod registry;

pub use document::{Document, DocumentNumber, ShelfId};
pub use registry::{Registry, RegistryError, Seed, SeedShelf, DEFAULT_SHELF};
