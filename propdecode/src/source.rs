//! Where property items come from.
//!
//! Opening image files and pulling their metadata out is the host platform's
//! job. We only describe that boundary here.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::error::SourceError;
use propdecode_types::RawPropertyItem;

/// Something that can hand over the property items of a file.
///
/// Each file format is handled by the host's image decoder. Implementors
/// should release any file handle before returning, on success or failure.
pub trait PropertyItemSource {
    /// Extracts the ordered property items from the file at `path`.
    ///
    /// # Errors
    ///
    /// Failing to open or decode the file is reported here. Callers treat it
    /// as an empty item list, never as fatal.
    fn property_items(&self, path: &Path) -> Result<Vec<RawPropertyItem>, SourceError>;
}

/// A source backed by an in-memory map of path -> items.
///
/// Useful for tests, or when items were extracted ahead of time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySource {
    files: FxHashMap<PathBuf, Vec<RawPropertyItem>>,
}

impl MemorySource {
    /// Registers the items for a path, replacing any already there.
    pub fn insert(&mut self, path: impl Into<PathBuf>, items: Vec<RawPropertyItem>) {
        self.files.insert(path.into(), items);
    }
}

impl PropertyItemSource for MemorySource {
    fn property_items(&self, path: &Path) -> Result<Vec<RawPropertyItem>, SourceError> {
        self.files.get(path).cloned().ok_or_else(|| {
            log::trace!("No items registered for `{}`.", path.display());
            SourceError::NotFound(path.to_path_buf())
        })
    }
}

impl<S: PropertyItemSource + ?Sized> PropertyItemSource for &S {
    fn property_items(&self, path: &Path) -> Result<Vec<RawPropertyItem>, SourceError> {
        (**self).property_items(path)
    }
}
