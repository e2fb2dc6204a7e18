/*!
 * API key context extractor
 *
 * Responsibility:
 * - middleware が取り出した候補キー (ApiKeyCtx) を handler に提供する
 * - axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - ApiKeyCtx
 * - ApiKeyExtractor
 */

mod core;
mod types;

pub use self::core::ApiKeyExtractor;
pub use types::ApiKeyCtx;
