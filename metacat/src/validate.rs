use crate::document::AppMetadata;
use crate::errors::{ErrorKind, MetacatError, MetacatResult};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

/// Syntactic email pattern: printable/unreserved local part, `@`, and a
/// DNS-label-structured domain with 1-63 characters per label. Syntax only,
/// in the interest of speed; no deliverability checks.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Returns true if `email` is syntactically valid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates that all required fields are present and that maintainer
/// emails are well formed.
///
/// Every violation is collected before failing, so the resulting
/// [ErrorKind::ValidationError] names all offending constraints at once
/// rather than just the first one.
///
/// Documents handed to the store are expected to have passed this gate;
/// the store and the query engine perform no validation of their own.
pub fn validate(doc: &AppMetadata) -> MetacatResult<()> {
    let mut violations: Vec<String> = Vec::new();

    let required = [
        ("title", &doc.title),
        ("version", &doc.version),
        ("company", &doc.company),
        ("website", &doc.website),
        ("source", &doc.source),
        ("license", &doc.license),
        ("description", &doc.description),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            violations.push(format!("{} must not be empty", field));
        }
    }

    for (index, maintainer) in doc.maintainers.iter().enumerate() {
        if maintainer.name.trim().is_empty() {
            violations.push(format!("maintainers[{}].name must not be empty", index));
        }
        if maintainer.email.trim().is_empty() {
            violations.push(format!("maintainers[{}].email must not be empty", index));
        } else if !is_valid_email(&maintainer.email) {
            violations.push(format!(
                "maintainers[{}].email '{}' is not a valid email address",
                index, maintainer.email
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        let message = format!("invalid metadata: {}", violations.iter().join("; "));
        log::error!("{}", message);
        Err(MetacatError::new(&message, ErrorKind::ValidationError))
    }
}
