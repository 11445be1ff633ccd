// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document store boundary.
//!
//! The search core only ever sees a `&[Document]`. Where those documents live is
//! the store's business: [`DocumentStore`] is the two-method contract the core
//! relies on, and [`MemoryStore`] is the in-process implementation.
//!
//! # Snapshots
//!
//! `MemoryStore` keeps the collection as an `Arc<Vec<Document>>` behind a lock.
//! Readers clone the `Arc` and search it with the lock released; writers build a
//! new vector under the write guard and swap it in. A search in flight keeps the snapshot it started
//! with, so no call ever observes a half-applied write.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::stats::derive_categories;
use crate::types::{Category, Document};

/// The store contract: list everything, fetch one.
pub trait DocumentStore {
    /// Every document, in store order.
    fn list_all(&self) -> Arc<Vec<Document>>;

    /// The document with `id`, if any.
    fn get_by_id(&self, id: &str) -> Option<Document>;
}

/// On-disk knowledge base: `{"articles": [...], "categories": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub articles: Vec<Document>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl KnowledgeBase {
    /// Parse a knowledge base from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Recount categories from the articles' tags.
    pub fn refresh_categories(&mut self) {
        self.categories = derive_categories(&self.articles);
    }
}

/// Read and parse a knowledge-base file.
pub fn load_knowledge_base(path: &Path) -> Result<KnowledgeBase, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let kb: KnowledgeBase = serde_json::from_str(&raw)?;
    debug!(
        path = %path.display(),
        articles = kb.articles.len(),
        categories = kb.categories.len(),
        "knowledge base loaded"
    );
    Ok(kb)
}

/// One consistent version of the store: a document list and the categories
/// counted from it (or loaded with it).
#[derive(Debug, Default, Clone)]
struct Contents {
    documents: Arc<Vec<Document>>,
    categories: Arc<Vec<Category>>,
}

impl Contents {
    fn recounted(documents: Vec<Document>) -> Self {
        let categories = derive_categories(&documents);
        Self {
            documents: Arc::new(documents),
            categories: Arc::new(categories),
        }
    }
}

/// In-memory copy-on-write document store.
///
/// Documents and categories share one lock, so a reader never pairs a new
/// document list with a stale category list. Writers hold the write guard for
/// the whole read-modify-write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RwLock<Contents>,
}

impl MemoryStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            contents: RwLock::new(Contents::recounted(documents)),
        }
    }

    /// A store holding a loaded knowledge base. The stored category list is
    /// kept as is; call [`MemoryStore::replace`] to recount.
    pub fn from_knowledge_base(kb: KnowledgeBase) -> Self {
        Self {
            contents: RwLock::new(Contents {
                documents: Arc::new(kb.articles),
                categories: Arc::new(kb.categories),
            }),
        }
    }

    /// Load a knowledge-base file into a new store.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        load_knowledge_base(path).map(Self::from_knowledge_base)
    }

    /// Current snapshot. Cheap: clones an `Arc`.
    pub fn snapshot(&self) -> Arc<Vec<Document>> {
        Arc::clone(&self.contents.read().documents)
    }

    pub fn categories(&self) -> Arc<Vec<Category>> {
        Arc::clone(&self.contents.read().categories)
    }

    /// Documents and categories taken under the same read guard.
    pub fn snapshot_with_categories(&self) -> (Arc<Vec<Document>>, Arc<Vec<Category>>) {
        let contents = self.contents.read();
        (
            Arc::clone(&contents.documents),
            Arc::clone(&contents.categories),
        )
    }

    pub fn len(&self) -> usize {
        self.contents.read().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.read().documents.is_empty()
    }

    /// Swap in a new collection and recount its categories.
    pub fn replace(&self, documents: Vec<Document>) {
        *self.contents.write() = Contents::recounted(documents);
    }

    /// Overwrite the document with the same id in place, or insert a new one
    /// at the front of the store.
    pub fn upsert(&self, document: Document) {
        let mut contents = self.contents.write();
        let mut next = contents.documents.as_ref().clone();
        match next.iter_mut().find(|d| d.id == document.id) {
            Some(slot) => *slot = document,
            None => next.insert(0, document),
        }
        *contents = Contents::recounted(next);
    }

    /// Remove the document with `id`.
    pub fn remove(&self, id: &str) -> Result<Document, StoreError> {
        let mut contents = self.contents.write();
        let idx = contents
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let mut next = contents.documents.as_ref().clone();
        let removed = next.remove(idx);
        *contents = Contents::recounted(next);
        Ok(removed)
    }

    /// Like [`DocumentStore::get_by_id`], but absence is an error.
    pub fn require(&self, id: &str) -> Result<Document, StoreError> {
        self.get_by_id(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// The store contents as a serializable knowledge base.
    pub fn to_knowledge_base(&self) -> KnowledgeBase {
        let (documents, categories) = self.snapshot_with_categories();
        KnowledgeBase {
            articles: documents.as_ref().clone(),
            categories: categories.as_ref().clone(),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn list_all(&self) -> Arc<Vec<Document>> {
        self.snapshot()
    }

    fn get_by_id(&self, id: &str) -> Option<Document> {
        self.contents
            .read()
            .documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }
}
