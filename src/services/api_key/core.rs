//! `Authorization: ApiKey <key>` parsing - core logic.
//!
//! Pure and framework-agnostic: no logging, no key lookup. Middleware calls
//! `get_api_key` and decides what a failure means for the request.

use super::headers::HeaderCollection;
use super::types::{API_KEY_SCHEME, AUTHORIZATION, ApiKeyError};

/// Extract the candidate API key from the first `Authorization` value.
///
/// The value is split on a single `' '`, not on whitespace runs, and the field
/// right after the scheme is returned verbatim. So `"ApiKey    k"` yields an
/// empty key with no error, and `"ApiKey a b"` yields `"a"`. Callers relying on
/// a non-empty key must check for it themselves.
pub fn get_api_key<H>(headers: &H) -> Result<&str, ApiKeyError>
where
    H: HeaderCollection + ?Sized,
{
    let raw = headers
        .first_value(AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(ApiKeyError::NoAuthHeader)?;

    let value = std::str::from_utf8(raw).map_err(|_| ApiKeyError::MalformedHeader)?;

    let mut fields = value.split(' ');
    match (fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key),
        _ => Err(ApiKeyError::MalformedHeader),
    }
}
