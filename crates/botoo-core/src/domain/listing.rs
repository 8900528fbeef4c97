//! Listing - 一覧取得のレスポンス形状

use serde::{Deserialize, Serialize};

/// folder marker 判定に使う区切り文字
pub const PATH_SEPARATOR: char = '/';

/// key が folder marker（`/` で終わる）かどうか
///
/// 一部のツールはディレクトリを表現するために `photos/` のような
/// 0 byte オブジェクトを作るため、一覧からは除外します。
pub fn is_folder_marker(key: &str) -> bool {
    key.ends_with(PATH_SEPARATOR)
}

/// 一覧の 1 エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl ObjectSummary {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

/// 一覧取得 1 ページ分のレスポンス
///
/// # 注意
/// - `contents` はプロバイダが返さなかった場合 `None`（空と同じ扱い）
/// - `is_truncated` が true でも続きは取りに行かない（1 ページのみ）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    #[serde(default)]
    pub contents: Option<Vec<ObjectSummary>>,

    #[serde(default)]
    pub is_truncated: bool,
}

impl ListPage {
    pub fn new(contents: Vec<ObjectSummary>) -> Self {
        Self {
            contents: Some(contents),
            is_truncated: false,
        }
    }

    pub fn truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = is_truncated;
        self
    }

    /// folder marker を除いた key を、プロバイダの返した順のまま取り出す
    pub fn into_file_keys(self) -> Vec<String> {
        self.contents
            .unwrap_or_default()
            .into_iter()
            .map(|entry| entry.key)
            .filter(|key| !is_folder_marker(key))
            .collect()
    }
}
