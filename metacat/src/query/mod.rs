//! Query evaluation over stored metadata documents.
//!
//! A [Query] is a set of ([FieldPath], target substring) constraints combined
//! by logical AND. Evaluating a query against a document projects the
//! document into its [crate::node::Node] tree once, then applies the path
//! matcher per constraint, short-circuiting on the first failure.

mod matcher;
mod path;

pub use matcher::matches;
pub use path::{canonical_segment, FieldPath, PATH_SEPARATOR};

use crate::document::AppMetadata;
use crate::errors::MetacatResult;
use indexmap::IndexMap;

/// How a constraint with an empty target value is interpreted.
///
/// The substring semantics of the matcher make an empty target match any
/// document whose path resolves to at least one scalar. Callers that want
/// `?field=` to mean "no constraint" can opt into [EmptyTarget::Ignore].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTarget {
    /// Empty target behaves like any other substring: it matches every
    /// document whose path resolves to a scalar.
    #[default]
    Substring,
    /// Empty target is dropped from the query as if it was never supplied.
    Ignore,
}

/// Evaluation options for a [Query].
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    pub empty_target: EmptyTarget,
}

/// One (field path, target substring) pair of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    path: FieldPath,
    target: String,
}

impl Constraint {
    pub fn new(path: FieldPath, target: impl Into<String>) -> Constraint {
        Constraint {
            path,
            target: target.into(),
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// A set of constraints combined by logical AND.
///
/// An empty query matches every document. There is no OR or NOT
/// composition; repeated query-string keys are resolved upstream with
/// last-occurrence-wins semantics before a query is built.
#[derive(Debug, Clone, Default)]
pub struct Query {
    constraints: Vec<Constraint>,
    options: QueryOptions,
}

impl Query {
    /// Creates an empty query, which matches every document.
    pub fn new() -> Query {
        Query::default()
    }

    /// Builds a query from raw query-string parameters.
    ///
    /// Each key is parsed as a comma-joined field path; each value is the
    /// target substring. Iteration order of the map fixes constraint order,
    /// and with it the short-circuit order.
    ///
    /// # Errors
    ///
    /// Returns an error if any key is not a well-formed field path.
    pub fn from_params(params: &IndexMap<String, String>) -> MetacatResult<Query> {
        let mut constraints = Vec::with_capacity(params.len());
        for (raw_path, target) in params {
            let path = FieldPath::parse(raw_path)?;
            constraints.push(Constraint::new(path, target.clone()));
        }
        Ok(Query {
            constraints,
            options: QueryOptions::default(),
        })
    }

    /// Replaces the evaluation options.
    pub fn with_options(mut self, options: QueryOptions) -> Query {
        self.options = options;
        self
    }

    /// Adds a constraint to this query.
    pub fn and(mut self, constraint: Constraint) -> Query {
        self.constraints.push(constraint);
        self
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Evaluates this query against a document.
    ///
    /// The document is projected once per evaluation pass and the matcher is
    /// applied per constraint; the first failing constraint settles the
    /// result.
    pub fn matches(&self, doc: &AppMetadata) -> bool {
        if self.constraints.is_empty() {
            return true;
        }

        let node = doc.to_node();
        for constraint in &self.constraints {
            if constraint.target.is_empty() && self.options.empty_target == EmptyTarget::Ignore {
                continue;
            }
            if !matches(&node, constraint.path.segments(), &constraint.target) {
                log::debug!(
                    "document '{}' failed constraint {}={}",
                    doc.storage_key(),
                    constraint.path,
                    constraint.target
                );
                return false;
            }
        }
        true
    }
}
