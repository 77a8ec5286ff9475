use crate::document::AppMetadata;
use crate::query::Query;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Process-wide, in-memory mapping from identity key to metadata document.
///
/// The store is shared by every concurrent inbound request, so the
/// underlying map sits behind a single `parking_lot` reader/writer lock.
/// Writes are rare and no store operation blocks on I/O, which makes a
/// coarse lock adequate: readers proceed in parallel, a `put` takes the
/// write lock for the duration of one map insert.
///
/// Documents are held as `Arc<AppMetadata>`; queries hand out clones of the
/// `Arc`, never copies of the documents themselves. A query observes a
/// consistent snapshot of the map for the duration of its read lock.
///
/// Cloning the store is cheap and every clone shares the same state.
///
/// # Examples
///
/// ```ignore
/// let store = MetadataStore::new();
/// store.put(doc.storage_key(), doc);
/// let all = store.get_all();
/// ```
#[derive(Clone, Default)]
pub struct MetadataStore {
    documents: Arc<RwLock<HashMap<String, Arc<AppMetadata>>>>,
}

impl MetadataStore {
    /// Creates a new empty store.
    pub fn new() -> MetadataStore {
        MetadataStore {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Inserts a document under the given key, overwriting any previous
    /// document stored there. Last write for a key wins; no uniqueness
    /// checks beyond the key itself.
    pub fn put(&self, key: impl Into<String>, doc: AppMetadata) {
        let key = key.into();
        let mut documents = self.documents.write();
        documents.insert(key.clone(), Arc::new(doc));
        log::debug!("stored metadata document under key '{}'", key);
    }

    /// Returns the document stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Arc<AppMetadata>> {
        let documents = self.documents.read();
        documents.get(key).cloned()
    }

    /// Evaluates `query` against every stored document and collects the
    /// matches into a freshly allocated list.
    ///
    /// Iteration order over the underlying map is unspecified, so result
    /// order is unspecified as well. An empty result is a normal outcome,
    /// not an error.
    pub fn find(&self, query: &Query) -> Vec<Arc<AppMetadata>> {
        let documents = self.documents.read();
        let results: Vec<Arc<AppMetadata>> = documents
            .values()
            .filter(|doc| query.matches(doc))
            .cloned()
            .collect();
        log::debug!(
            "query with {} constraint(s) matched {} of {} document(s)",
            query.constraints().len(),
            results.len(),
            documents.len()
        );
        results
    }

    /// Returns every stored document. Equivalent to [MetadataStore::find]
    /// with an empty query.
    pub fn get_all(&self) -> Vec<Arc<AppMetadata>> {
        let documents = self.documents.read();
        documents.values().cloned().collect()
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Returns true if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}
