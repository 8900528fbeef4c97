//! ObjectStore port - bucket + key で引く Blob ストレージ
//!
//! # 実装
//! - **S3ObjectStore**: aws-sdk-s3 を使う本番用
//! - **InMemoryObjectStore**: テスト・開発用

use std::path::Path;

use async_trait::async_trait;

use crate::domain::ListPage;

/// ObjectStore は facade が必要とする最小限のストレージ操作
///
/// # 設計原則
/// - 1 メソッド = 1 リクエスト（リトライ・ページングはしない）
/// - エラーは実装ごとの型（`Error`）のまま返す
/// - `Send + Sync` を要求（複数 task から共有できる）
#[async_trait]
pub trait ObjectStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// オブジェクトの本文を全部読み込んで返す
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, Self::Error>;

    /// ローカルファイルをアップロードする（同じ key があれば上書き）
    ///
    /// ファイルの読み込み、content-length やチェックサムの計算は実装側の責務です。
    async fn upload_file(&self, file_path: &Path, bucket: &str, key: &str)
    -> Result<(), Self::Error>;

    /// prefix に一致するオブジェクトを 1 ページ分だけ返す
    async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<ListPage, Self::Error>;
}
