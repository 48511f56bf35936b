//! Key-value persistence for marketplace collections.
//!
//! Each collection (orders, ...) is stored as one JSON document under its
//! name. The quote engine never touches this module.

mod orders;

pub use self::orders::{
    NewOrder, Order, OrderItem, OrderRepository, OrderStatus, Payment, PaymentStatus,
};

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::error::Result;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Storage backend holding one JSON document per collection
pub trait KeyValueStore {
    /// Raw document of a collection, `None` if it was never written
    fn get(&self, collection: &str) -> Result<Option<String>>;

    /// Replace the document of a collection
    fn put(&self, collection: &str, document: &str) -> Result<()>;
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, collection: &str) -> Result<Option<String>> {
        let documents = self.documents.read().unwrap_or_else(PoisonError::into_inner);
        Ok(documents.get(collection).cloned())
    }

    fn put(&self, collection: &str, document: &str) -> Result<()> {
        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        documents.insert(collection.to_string(), document.to_string());
        Ok(())
    }
}

/// Store writing `<collection>.json` files into a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.json", collection))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, collection: &str) -> Result<Option<String>> {
        let path = self.path_for(collection);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Writes to a temporary file in the same directory and renames it over
    /// the collection, so readers see either the old or the new document
    fn put(&self, collection: &str, document: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(collection);
        let tmp = self.dir.join(format!(
            ".{}.json.tmp.{}.{}",
            collection,
            process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        {
            let mut file = File::create(&tmp)?;
            file.write_all(document.as_bytes())?;
            file.sync_all()?;
        }
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(path = %path.display(), bytes = document.len(), "Collection written");
        Ok(())
    }
}
