//! `Authorization: ApiKey <key>` 抽出 → ApiKeyCtx を extensions に入れる
//!
//! - キーの照合はしない。取り出した候補キーを handler / 後段の middleware に渡すだけ。
//! - `ApiKey` の後に空白が連続すると空のキーが取り出される (エラーにはならない)。
//!   そのまま渡すが warn を出しておく。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::config::ApiKeyPolicy;
use crate::error::AppError;
use crate::extractors::ApiKeyCtx;
use crate::services::api_key::{self, ApiKeyError};

/// ルーター全体に api key 抽出を掛ける。
///
/// 例：
/// ```ignore
/// let policy = ApiKeyPolicy::from_env()?;
/// let app = middleware::auth::api_key::apply(routes(), policy);
/// ```
pub fn apply<S>(router: Router<S>, policy: ApiKeyPolicy) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(policy, api_key_middleware))
}

async fn api_key_middleware(
    State(policy): State<ApiKeyPolicy>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ctx = match api_key::get_api_key(req.headers()) {
        Ok(key) => {
            if key.is_empty() {
                tracing::warn!("empty api key after scheme (repeated or trailing space)");
            }
            Some(ApiKeyCtx::new(key))
        }
        Err(ApiKeyError::NoAuthHeader) if !policy.required => None,
        Err(err) => {
            tracing::warn!(error = %err, "api key extraction failed");
            return Err(err.into());
        }
    };

    // middleware → extractor への受け渡し
    if let Some(ctx) = ctx {
        req.extensions_mut().insert(ctx);
    }

    Ok(next.run(req).await)
}
