/*!
 * ApiKey header extraction
 *
 * Responsibility:
 * - `Authorization: ApiKey <key>` から候補キーを取り出す (検証はしない)
 * - header の参照は HeaderCollection 越しに行い、axum 以外からも呼べるようにする
 *
 * Public API:
 * - get_api_key
 * - HeaderCollection
 * - ApiKeyError
 */

mod core;
mod headers;
mod types;

pub use self::core::get_api_key;
pub use headers::HeaderCollection;
pub use types::{API_KEY_SCHEME, AUTHORIZATION, ApiKeyError};
