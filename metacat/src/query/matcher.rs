use crate::node::Node;
use crate::query::path::canonical_segment;

/// Determines whether the subtree reachable via `path` contains a string
/// value matching `target` under case-insensitive substring semantics.
///
/// The algorithm walks the tree one segment at a time:
///
/// * an exhausted path finds nothing (a path must resolve to at least one
///   scalar to be testable);
/// * an object consumes the head segment (normalized to canonical casing)
///   and either tests the scalar candidates of the child when the path is
///   exhausted, or recurses into the child with the remaining segments;
/// * a list fans out to every element with the same remaining path, which
///   is what lets `maintainers,email` reach into every maintainer without
///   an explicit index;
/// * a scalar with segments left has nowhere further to descend.
///
/// A path-resolution miss (unknown segment, or descending into a scalar) is
/// not an error; it reports as an ordinary non-match.
pub fn matches(node: &Node, path: &[String], target: &str) -> bool {
    let (head, rest) = match path.split_first() {
        Some(split) => split,
        None => return false,
    };

    match node {
        Node::Object(fields) => {
            let key = canonical_segment(head);
            match fields.get(&key) {
                None => false,
                Some(child) => {
                    if rest.is_empty() {
                        scalar_candidates(child)
                            .into_iter()
                            .any(|candidate| contains_ci(candidate, target))
                    } else {
                        matches(child, rest, target)
                    }
                }
            }
        }
        Node::List(items) => items.iter().any(|item| matches(item, path, target)),
        Node::Scalar(_) => false,
    }
}

/// Collects the strings a resolved node offers for substring testing: the
/// scalar itself, or the scalar elements of a list-of-scalars field.
/// Objects and non-scalar list elements offer nothing.
fn scalar_candidates(node: &Node) -> Vec<&str> {
    match node {
        Node::Scalar(value) => vec![value.as_str()],
        Node::List(items) => items
            .iter()
            .filter_map(|item| match item {
                Node::Scalar(value) => Some(value.as_str()),
                _ => None,
            })
            .collect(),
        Node::Object(_) => Vec::new(),
    }
}

/// Case-insensitive, unanchored substring test. No regex semantics.
fn contains_ci(candidate: &str, target: &str) -> bool {
    candidate.to_lowercase().contains(&target.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{AppMetadata, Extras, Maintainer, SpecGroup};
    use crate::query::path::FieldPath;

    fn doc_with_maintainers(emails: &[&str]) -> AppMetadata {
        AppMetadata {
            title: "Valid App".to_string(),
            version: "0.0.1".to_string(),
            maintainers: emails
                .iter()
                .enumerate()
                .map(|(i, email)| Maintainer {
                    name: format!("maintainer {}", i + 1),
                    email: email.to_string(),
                })
                .collect(),
            company: "Random Inc.".to_string(),
            website: "https://website.com".to_string(),
            source: "https://github.com/random/repo".to_string(),
            license: "Apache-2.0".to_string(),
            description: "some description".to_string(),
            ..Default::default()
        }
    }

    fn check(doc: &AppMetadata, path: &str, target: &str) -> bool {
        let path = FieldPath::parse(path).unwrap();
        matches(&doc.to_node(), path.segments(), target)
    }

    #[test]
    fn scalar_substring_is_case_insensitive() {
        let mut doc = doc_with_maintainers(&[]);
        doc.maintainers.push(Maintainer {
            name: "Jane Doe".to_string(),
            email: "jane@example.org".to_string(),
        });
        assert!(check(&doc, "maintainers,name", "jane"));
        assert!(check(&doc, "maintainers,name", "JANE"));
        assert!(!check(&doc, "maintainers,name", "zzz"));
    }

    #[test]
    fn empty_target_matches_any_resolvable_scalar() {
        let doc = doc_with_maintainers(&[]);
        assert!(check(&doc, "title", ""));
    }

    #[test]
    fn top_level_scalar_fields_match() {
        let doc = doc_with_maintainers(&[]);
        assert!(check(&doc, "title", "valid"));
        assert!(check(&doc, "license", "apache"));
        assert!(check(&doc, "company", "random inc"));
        assert!(!check(&doc, "title", "other app"));
    }

    #[test]
    fn list_traversal_reaches_every_element_without_an_index() {
        let doc = doc_with_maintainers(&["a@b.com", "second@example.org", "c@d.com"]);
        assert!(check(&doc, "maintainers,email", "example.org"));
        assert!(check(&doc, "maintainers,email", "a@b.com"));
        assert!(!check(&doc, "maintainers,email", "zzz"));
    }

    #[test]
    fn path_exhaustion_on_scalar_returns_false() {
        let doc = doc_with_maintainers(&[]);
        assert!(!check(&doc, "title,extra", "valid"));
    }

    #[test]
    fn empty_path_returns_false() {
        let doc = doc_with_maintainers(&[]);
        assert!(!matches(&doc.to_node(), &[], "valid"));
    }

    #[test]
    fn unknown_segment_is_a_plain_non_match() {
        let doc = doc_with_maintainers(&[]);
        assert!(!check(&doc, "nonexistent", "anything"));
        assert!(!check(&doc, "maintainers,phone", "555"));
    }

    #[test]
    fn list_of_scalars_is_tested_element_wise() {
        let mut doc = doc_with_maintainers(&[]);
        doc.os = vec!["linux".to_string(), "darwin".to_string()];
        assert!(check(&doc, "os", "linux"));
        assert!(check(&doc, "os", "DARWIN"));
        assert!(!check(&doc, "os", "windows"));
    }

    #[test]
    fn path_into_list_of_objects_without_leaf_segment_fails() {
        let doc = doc_with_maintainers(&["a@b.com"]);
        // maintainers resolves to a list of objects, not scalars
        assert!(!check(&doc, "maintainers", "a@b.com"));
    }

    #[test]
    fn nested_groups_resolve() {
        let mut doc = doc_with_maintainers(&[]);
        doc.metadata = Some(Extras {
            label: "Beta-Build".to_string(),
        });
        doc.spec = Some(SpecGroup { replicas: Some(12) });
        assert!(check(&doc, "metadata,label", "beta"));
        assert!(check(&doc, "spec,replicas", "12"));
        assert!(!check(&doc, "metadata,label", "stable"));
    }

    #[test]
    fn uppercase_path_segments_are_normalized() {
        let doc = doc_with_maintainers(&["a@b.com"]);
        assert!(check(&doc, "MAINTAINERS,EMAIL", "a@b.com"));
    }

    #[test]
    fn contains_ci_semantics() {
        assert!(contains_ci("Jane Doe", "jane"));
        assert!(contains_ci("Jane Doe", ""));
        assert!(contains_ci("", ""));
        assert!(!contains_ci("Jane Doe", "zzz"));
        assert!(!contains_ci("", "jane"));
    }
}
