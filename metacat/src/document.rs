use serde::{Deserialize, Serialize};

/// Separator between the title and version components of a storage key.
///
/// A plain concatenation of title and version is ambiguous (`"ab" + "c"`
/// and `"a" + "bc"` collide), so the two components are joined with a
/// character that cannot appear meaningfully between them.
pub const KEY_SEPARATOR: char = '/';

/// A single maintainer entry of an application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Maintainer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Free-form extras group carried under the `metadata` key of a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extras {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

/// Deployment hints carried under the `spec` key of a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u64>,
}

/// A stored application metadata record.
///
/// This is the typed document shape accepted by the ingestion endpoint and
/// held by the [crate::store::MetadataStore]. All scalar fields are required
/// once a document has passed [crate::validate::validate]; the maintainer
/// list, OS list and the nested `metadata`/`spec` groups are optional.
///
/// Every field defaults during deserialization so that a well-formed payload
/// with missing required fields decodes successfully and fails validation
/// with a message naming the offending fields, instead of failing decode.
///
/// # Examples
///
/// ```ignore
/// let doc: AppMetadata = serde_yaml::from_str(r#"
/// title: Valid App
/// version: "0.0.1"
/// maintainers:
///   - name: firstmaintainer app1
///     email: firstmaintainer@hotmail.com
/// company: Random Inc.
/// website: https://website.com
/// source: https://github.com/random/repo
/// license: Apache-2.0
/// description: |
///   ### Interesting Title
///   Some application content, and description
/// "#)?;
/// assert_eq!(doc.storage_key(), "Valid App/0.0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub maintainers: Vec<Maintainer>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub os: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Extras>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<SpecGroup>,
}

impl AppMetadata {
    /// Returns the identity key this document is stored under.
    ///
    /// Identity is derived from title and version, so uploading a new
    /// revision of the same title under a different version creates a new
    /// entry, while re-uploading the same title and version overwrites the
    /// previous document.
    pub fn storage_key(&self) -> String {
        format!("{}{}{}", self.title, KEY_SEPARATOR, self.version)
    }
}
