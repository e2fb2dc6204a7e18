/*
 * Responsibility
 * - 環境変数から ApiKeyPolicy を読み込む (API_KEY_REQUIRED)
 * - 設定値のバリデーション (不正値なら起動失敗)
 */
use std::fmt;

/// Policy knobs for the api key middleware.
///
/// Kept free of axum types so it can be built in tests and passed as
/// middleware state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiKeyPolicy {
    // If false, requests without an Authorization header pass through
    // without an ApiKeyCtx.
    pub required: bool,
}

impl Default for ApiKeyPolicy {
    fn default() -> Self {
        Self { required: true }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ApiKeyPolicy {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let required = match std::env::var("API_KEY_REQUIRED") {
            Ok(v) => parse_flag(&v).ok_or(ConfigError::Invalid("API_KEY_REQUIRED"))?,
            Err(_) => Self::default().required,
        };

        Ok(Self { required })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn required_by_default() {
        assert!(ApiKeyPolicy::default().required);
    }

    #[test]
    fn invalid_error_names_the_key() {
        assert_eq!(
            ConfigError::Invalid("API_KEY_REQUIRED").to_string(),
            "invalid configuration: API_KEY_REQUIRED"
        );
    }
}
