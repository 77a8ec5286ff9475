//! Request handlers for the metadata endpoints.

use crate::error::ApiError;
use axum::body::Bytes;
use axum::extract::{Query as QueryParams, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;
use metacat::codec;
use metacat::query::Query;
use metacat::store::MetadataStore;
use metacat::validate;

/// The only content type the ingestion endpoint accepts.
pub const YAML_CONTENT_TYPE: &str = "application/x-yaml";

/// Shared state handed to every handler. The store clone is cheap; all
/// clones share the same underlying guarded map.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: MetadataStore,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            store: MetadataStore::new(),
        }
    }
}

/// `POST /v1/metadata/` - decode, validate and store an uploaded document.
///
/// Responds 415 before decoding when the declared content type is wrong,
/// 400 with a diagnostic on decode or validation failure, and 204 with an
/// empty body on success.
pub async fn persist_metadata(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    if !has_content_type(&headers, YAML_CONTENT_TYPE) {
        log::warn!("rejected upload with unsupported content type");
        return Err(ApiError::UnsupportedMediaType);
    }

    let doc = codec::decode(&body)?;
    validate::validate(&doc)?;

    let key = doc.storage_key();
    state.store.put(key.clone(), doc);
    log::info!("successful metadata upload for '{}'", key);

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /v1/metadata/search` - evaluate the query-string constraints
/// against every stored document.
///
/// Each query-string key is a comma-joined field path, each value a target
/// substring; parameters compose as AND. A repeated key is not supported:
/// the last occurrence wins, silently. The matching documents are returned
/// as a YAML stream; no matches yield an empty stream, not an error.
pub async fn search_metadata(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IndexMap<String, String>>,
) -> Result<Response, ApiError> {
    let query = Query::from_params(&params)?;
    let results = state.store.find(&query);
    let body = codec::encode_stream(&results)?;

    Ok(([(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], body).into_response())
}

/// Compares the declared content type against `mimetype`, ignoring case.
fn has_content_type(headers: &HeaderMap, mimetype: &str) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.eq_ignore_ascii_case(mimetype))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn has_content_type_matches_case_insensitively() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("Application/X-YAML"),
        );
        assert!(has_content_type(&headers, YAML_CONTENT_TYPE));
    }

    #[test]
    fn has_content_type_rejects_other_types_and_absence() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        assert!(!has_content_type(&headers, YAML_CONTENT_TYPE));

        let headers = HeaderMap::new();
        assert!(!has_content_type(&headers, YAML_CONTENT_TYPE));
    }
}
