/*
 * Responsibility
 * - Handler から見える「候補 API キー」の型
 * - middleware が header から取り出して request extensions に格納する
 *
 * Notes
 * - キーの照合 (DB lookup など) はこの crate の外の責務
 */

/// `Authorization: ApiKey <key>` から取り出したキー (未検証)
///
/// - `key` は空文字列になりうる (`ApiKey` の後に空白が連続した場合)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyCtx {
    pub key: String,
}

impl ApiKeyCtx {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}
