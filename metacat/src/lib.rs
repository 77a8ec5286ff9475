//! # metacat - Application Metadata Catalog
//!
//! metacat is an in-memory store for structured application metadata
//! documents with nested field-path search. Documents are uploaded as YAML,
//! validated, stored keyed by identity, and queried with an arbitrary set of
//! field-path/value constraints using case-insensitive substring semantics.
//!
//! ## Key pieces
//!
//! - **Document model** ([document]): the typed [AppMetadata] record with
//!   required scalar fields, optional maintainers, OS list and nested groups
//! - **Tree projection** ([node]): converts a typed document into a generic
//!   [Node] tree (objects, lists, scalars) suitable for path traversal
//! - **Query engine** ([query]): comma-joined field paths, a recursive path
//!   matcher with list fan-out, and AND-composed constraint evaluation
//! - **Store** ([store]): a lock-guarded mapping from identity key to
//!   document, with overwrite-insert and filtered retrieval
//! - **Validation** ([validate]): required-field and maintainer-email checks
//! - **Codec** ([codec]): YAML decode and multi-document stream encode
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use metacat::codec;
//! use metacat::query::Query;
//! use metacat::store::MetadataStore;
//! use metacat::validate;
//!
//! # fn main() -> metacat::errors::MetacatResult<()> {
//! let doc = codec::decode(payload)?;
//! validate::validate(&doc)?;
//!
//! let store = MetadataStore::new();
//! store.put(doc.storage_key(), doc);
//!
//! let query = Query::from_params(&params)?;
//! let results = store.find(&query);
//! # Ok(())
//! # }
//! ```
//!
//! The HTTP transport lives in the `metacat-server` crate; this crate has no
//! I/O of its own and every operation is a synchronous in-memory
//! computation.

pub mod codec;
pub mod document;
pub mod errors;
pub mod node;
pub mod query;
pub mod store;
pub mod validate;

pub use document::{AppMetadata, Extras, Maintainer, SpecGroup};
pub use node::Node;
pub use store::MetadataStore;
