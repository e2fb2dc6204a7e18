/// Header the candidate key is read from.
pub const AUTHORIZATION: &str = "Authorization";

/// Scheme token that must prefix the key. Compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Why a key could not be extracted.
///
/// The messages are fixed; callers and tests compare against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included in request")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}
