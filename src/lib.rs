/*
 * Responsibility
 * - `Authorization: ApiKey <key>` から候補キーを取り出す (services::api_key)
 * - axum 向けの middleware / extractor / エラー応答
 * - 設定 (ApiKeyPolicy) と tracing 初期化
 */
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod services;
pub mod telemetry;

pub use config::ApiKeyPolicy;
pub use error::AppError;
pub use extractors::{ApiKeyCtx, ApiKeyExtractor};
pub use services::api_key::{ApiKeyError, HeaderCollection, get_api_key};
