mod loader;
mod types;

pub use types::CatalogItem;

use std::io::BufRead;
use std::path::Path;

use crate::Result;

/// Immutable table of catalog items, loaded once at startup.
///
/// Items are identified by their 1-based position; `get` never fabricates
/// a record for an out-of-range id.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Load the catalog from a delimited file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            items: loader::load(path)?,
        })
    }

    /// Parse the catalog from any reader.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self {
            items: loader::parse(reader)?,
        })
    }

    /// Build a catalog from already-validated items.
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// O(1) lookup by 1-based id. Returns `None` for 0 or past the end.
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        if id == 0 {
            return None;
        }
        self.items.get(id as usize - 1)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
