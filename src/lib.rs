//! docshelf - An in-memory document filing console
//!
//! Documents (type, number, holder) are filed on labelled shelves. The
//! interactive loop adds, moves, deletes and looks them up; nothing is
//! persisted between runs.

pub mod cli;
pub mod config;
pub mod domain;

pub use domain::{Document, DocumentNumber, Registry, RegistryError, ShelfId};
