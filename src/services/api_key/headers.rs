//! Case-insensitive header lookup.
//!
//! The extractor only needs "first value stored under this name". Keeping that
//! behind a trait lets it run against an axum `HeaderMap` in middleware and
//! against a plain map in tests or non-axum callers.

use std::collections::HashMap;
use std::hash::BuildHasher;

use axum::http::HeaderMap;

pub trait HeaderCollection {
    /// Raw bytes of the first value stored under `name`.
    ///
    /// Names compare ignoring ASCII case. Returns `None` when the header is
    /// absent or has no values.
    fn first_value(&self, name: &str) -> Option<&[u8]>;
}

impl HeaderCollection for HeaderMap {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        // `HeaderMap::get` normalizes the name and yields the first value.
        self.get(name).map(|v| v.as_bytes())
    }
}

impl<S: BuildHasher> HeaderCollection for HashMap<String, Vec<String>, S> {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        let values = match self.get(name) {
            Some(values) => values,
            None => {
                self.iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)?
            }
        };

        values.first().map(|v| v.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};

    fn plain(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect()
    }

    #[test]
    fn header_map_lookup_ignores_case() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("ApiKey abc"));

        assert_eq!(
            headers.first_value("Authorization"),
            Some(&b"ApiKey abc"[..])
        );
        assert_eq!(
            headers.first_value("AUTHORIZATION"),
            Some(&b"ApiKey abc"[..])
        );
    }

    #[test]
    fn header_map_returns_first_of_many() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey one"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey two"));

        assert_eq!(
            headers.first_value("authorization"),
            Some(&b"ApiKey one"[..])
        );
    }

    #[test]
    fn plain_map_lookup_ignores_case() {
        let headers = plain(&[("authorization", "ApiKey abc")]);

        assert_eq!(
            headers.first_value("Authorization"),
            Some(&b"ApiKey abc"[..])
        );
    }

    #[test]
    fn plain_map_prefers_exact_name() {
        let headers = plain(&[
            ("AUTHORIZATION", "ApiKey upper"),
            ("Authorization", "ApiKey exact"),
        ]);

        assert_eq!(
            headers.first_value("Authorization"),
            Some(&b"ApiKey exact"[..])
        );
    }

    #[test]
    fn plain_map_empty_value_list_is_absent() {
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), Vec::<String>::new());

        assert_eq!(headers.first_value("Authorization"), None);
    }

    #[test]
    fn missing_header_is_absent() {
        let headers = plain(&[("Content-Type", "application/json")]);

        assert_eq!(headers.first_value("Authorization"), None);
        assert_eq!(HeaderMap::new().first_value("Authorization"), None);
    }
}
