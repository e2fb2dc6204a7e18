/*
 * Responsibility
 * - tracing subscriber の初期化 (組み込み先のサービスから呼ぶ)
 */
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns an error if a global subscriber is already set, so callers that
/// share a process (tests, embedding services) can ignore it.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,api_key_auth=debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
