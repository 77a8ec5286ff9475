use crate::errors::{ErrorKind, MetacatError, MetacatResult};
use std::fmt::Display;

/// Separator between segments of a caller-supplied field path.
pub const PATH_SEPARATOR: char = ',';

/// Normalizes a path segment to canonical field-name casing.
///
/// The first letter is uppercased and the rest lowercased, matching the
/// casing used for [crate::node::Node] object keys. This tolerates
/// caller-supplied lowercase segments like `maintainers` or `email`.
pub fn canonical_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// An ordered sequence of field-name segments locating a value inside a
/// document's tree form.
///
/// Paths arrive from the caller as a comma-joined string
/// (e.g. `"maintainers,email"`) and are split into segments here. Segments
/// are stored as supplied; canonicalization happens during matching.
///
/// # Examples
///
/// ```ignore
/// let path = FieldPath::parse("maintainers,email")?;
/// assert_eq!(path.segments(), ["maintainers", "email"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a comma-joined path string into a [FieldPath].
    ///
    /// # Errors
    ///
    /// Returns an [ErrorKind::InvalidFieldPath] error if the string is empty
    /// or contains an empty segment (e.g. `"maintainers,,email"`).
    pub fn parse(raw: &str) -> MetacatResult<FieldPath> {
        if raw.trim().is_empty() {
            log::error!("Field path cannot be empty");
            return Err(MetacatError::new(
                "Field path cannot be empty",
                ErrorKind::InvalidFieldPath,
            ));
        }

        let mut segments = Vec::new();
        for segment in raw.split(PATH_SEPARATOR) {
            let segment = segment.trim();
            if segment.is_empty() {
                log::error!("Field path '{}' contains an empty segment", raw);
                return Err(MetacatError::new(
                    &format!("Field path '{}' contains an empty segment", raw),
                    ErrorKind::InvalidFieldPath,
                ));
            }
            segments.push(segment.to_string());
        }

        Ok(FieldPath { segments })
    }

    /// Creates a path directly from segments, rejecting empty input.
    pub fn with_segments(segments: Vec<&str>) -> MetacatResult<FieldPath> {
        if segments.is_empty() {
            log::error!("Field path segments cannot be empty");
            return Err(MetacatError::new(
                "Field path segments cannot be empty",
                ErrorKind::InvalidFieldPath,
            ));
        }
        Ok(FieldPath {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Returns the path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join(","))
    }
}
