use crate::document::AppMetadata;
use std::collections::BTreeMap;

/// Generic tree representation of a document used for path-based querying.
///
/// A [Node] is a tagged variant covering the three shapes a document field
/// can take: a mapping from canonical field name to child node, an ordered
/// sequence of child nodes, or a plain string scalar. Non-string scalars
/// (e.g. a replica count) are projected as their decimal string form so that
/// the matcher only ever compares strings.
///
/// Keys of a [Node::Object] are stored in canonical casing (first letter
/// upper, rest lower), matching conventional struct-field capitalization;
/// caller-supplied path segments are normalized to the same casing during
/// matching.
///
/// # Lifecycle
///
/// A node tree is created fresh from the typed [AppMetadata] on every query
/// evaluation pass and never cached. The typed document stays the single
/// source of truth; the tree is a throwaway projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A mapping from canonical field name to child node.
    Object(BTreeMap<String, Node>),
    /// An ordered sequence of child nodes.
    List(Vec<Node>),
    /// A string value.
    Scalar(String),
}

impl Node {
    /// Creates a scalar node from anything string-like.
    pub fn scalar(value: impl Into<String>) -> Node {
        Node::Scalar(value.into())
    }

    /// Returns the child node under `key` if this node is an object.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Returns true if this node is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }
}

impl AppMetadata {
    /// Projects this document into its generic [Node] tree.
    ///
    /// The projection is pure and lossless: every field reachable on the
    /// document is reachable in the tree under its canonical name. Optional
    /// groups that are absent on the document are absent from the tree.
    pub fn to_node(&self) -> Node {
        let mut fields = BTreeMap::new();
        fields.insert("Title".to_string(), Node::scalar(&self.title));
        fields.insert("Version".to_string(), Node::scalar(&self.version));
        fields.insert("Company".to_string(), Node::scalar(&self.company));
        fields.insert("Website".to_string(), Node::scalar(&self.website));
        fields.insert("Source".to_string(), Node::scalar(&self.source));
        fields.insert("License".to_string(), Node::scalar(&self.license));
        fields.insert("Description".to_string(), Node::scalar(&self.description));

        let maintainers = self
            .maintainers
            .iter()
            .map(|m| {
                let mut entry = BTreeMap::new();
                entry.insert("Name".to_string(), Node::scalar(&m.name));
                entry.insert("Email".to_string(), Node::scalar(&m.email));
                Node::Object(entry)
            })
            .collect();
        fields.insert("Maintainers".to_string(), Node::List(maintainers));

        fields.insert(
            "Os".to_string(),
            Node::List(self.os.iter().map(Node::scalar).collect()),
        );

        if let Some(extras) = &self.metadata {
            let mut entry = BTreeMap::new();
            entry.insert("Label".to_string(), Node::scalar(&extras.label));
            fields.insert("Metadata".to_string(), Node::Object(entry));
        }

        if let Some(spec) = &self.spec {
            let mut entry = BTreeMap::new();
            if let Some(replicas) = spec.replicas {
                entry.insert("Replicas".to_string(), Node::scalar(replicas.to_string()));
            }
            fields.insert("Spec".to_string(), Node::Object(entry));
        }

        Node::Object(fields)
    }
}
