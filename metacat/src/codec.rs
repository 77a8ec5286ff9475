use crate::document::AppMetadata;
use crate::errors::{ErrorKind, MetacatError, MetacatResult};
use std::sync::Arc;

/// Separator line between documents in a multi-document YAML stream.
const DOCUMENT_SEPARATOR: &str = "---\n";

/// Parses a serialized YAML payload into a typed [AppMetadata] document.
///
/// Decoding fully populates every field the tree projector reads (missing
/// optional fields default). Failures are [ErrorKind::DecodeError], distinct
/// from validation failures, so the transport can report them separately.
pub fn decode(bytes: &[u8]) -> MetacatResult<AppMetadata> {
    serde_yaml::from_slice(bytes).map_err(|err| {
        log::error!("error parsing yaml: {}", err);
        MetacatError::new(
            &format!("error parsing yaml: {}", err),
            ErrorKind::DecodeError,
        )
    })
}

/// Serializes a single document to YAML.
pub fn encode(doc: &AppMetadata) -> MetacatResult<String> {
    serde_yaml::to_string(doc).map_err(|err| {
        log::error!("error encoding yaml: {}", err);
        MetacatError::new(
            &format!("error encoding yaml: {}", err),
            ErrorKind::EncodingError,
        )
    })
}

/// Serializes a result set as a multi-document YAML stream, documents
/// separated by `---`. An empty result set yields an empty stream.
pub fn encode_stream(docs: &[Arc<AppMetadata>]) -> MetacatResult<String> {
    let mut stream = String::new();
    for (index, doc) in docs.iter().enumerate() {
        if index > 0 {
            stream.push_str(DOCUMENT_SEPARATOR);
        }
        stream.push_str(&encode(doc)?);
    }
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Maintainer;

    const VALID_YAML: &str = r#"
title: Valid App 1
version: "0.0.1"
maintainers:
  - name: firstmaintainer app1
    email: firstmaintainer@hotmail.com
  - name: secondmaintainer app1
    email: secondmaintainer@gmail.com
company: Random Inc.
website: https://website.com
source: https://github.com/random/repo
license: Apache-2.0
description: |
  ### Interesting Title
  Some application content, and description
"#;

    #[test]
    fn decode_valid_payload() {
        let doc = decode(VALID_YAML.as_bytes()).unwrap();
        assert_eq!(doc.title, "Valid App 1");
        assert_eq!(doc.version, "0.0.1");
        assert_eq!(doc.maintainers.len(), 2);
        assert_eq!(doc.maintainers[1].email, "secondmaintainer@gmail.com");
        assert!(doc.description.contains("Interesting Title"));
    }

    #[test]
    fn decode_malformed_payload_is_a_decode_error() {
        let err = decode(b"title: [unterminated").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::DecodeError);
        assert!(err.message().contains("error parsing yaml"));
    }

    #[test]
    fn decode_with_missing_fields_succeeds() {
        // required-field enforcement belongs to validation, not decoding
        let doc = decode(b"title: Only Title\n").unwrap();
        assert_eq!(doc.title, "Only Title");
        assert!(doc.version.is_empty());
    }

    #[test]
    fn encode_stream_of_nothing_is_empty() {
        assert_eq!(encode_stream(&[]).unwrap(), "");
    }

    #[test]
    fn encode_stream_separates_documents() {
        let a = Arc::new(AppMetadata {
            title: "App A".to_string(),
            version: "1.0".to_string(),
            ..Default::default()
        });
        let b = Arc::new(AppMetadata {
            title: "App B".to_string(),
            version: "2.0".to_string(),
            ..Default::default()
        });

        let stream = encode_stream(&[a, b]).unwrap();
        assert!(stream.contains("App A"));
        assert!(stream.contains("App B"));
        assert_eq!(stream.matches("---").count(), 1);
    }

    #[test]
    fn stream_round_trips_through_the_multi_document_parser() {
        let a = Arc::new(AppMetadata {
            title: "App A".to_string(),
            version: "1.0".to_string(),
            maintainers: vec![Maintainer {
                name: "someone".to_string(),
                email: "a@b.com".to_string(),
            }],
            ..Default::default()
        });
        let b = Arc::new(AppMetadata {
            title: "App B".to_string(),
            version: "2.0".to_string(),
            ..Default::default()
        });

        let stream = encode_stream(&[a.clone(), b.clone()]).unwrap();
        let parsed: Vec<AppMetadata> = serde_yaml::Deserializer::from_str(&stream)
            .map(|document| {
                use serde::Deserialize;
                AppMetadata::deserialize(document).unwrap()
            })
            .collect();
        assert_eq!(parsed, vec![(*a).clone(), (*b).clone()]);
    }
}
