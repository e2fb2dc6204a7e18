/*
 * Responsibility
 * - middleware の公開インターフェース
 * - pub fn api_key::apply(...) など
 */
pub mod auth;
