//! S3ObjectStore - aws-sdk-s3 を使う本番用 ObjectStore

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::{ByteStream, ByteStreamError};
use aws_sdk_s3::types::Object;
use tracing::debug;

use crate::config::S3Config;
use crate::domain::{ListPage, ObjectSummary};
use crate::ports::ObjectStore;

/// S3ObjectStore のエラー
///
/// SDK のエラーを包むだけで、内容は書き換えません。
#[derive(Debug, thiserror::Error)]
pub enum S3StoreError {
    /// S3 からのエラー（NoSuchKey, AccessDenied, 認証情報なし, 通信エラーなど）
    #[error(transparent)]
    Service(#[from] aws_sdk_s3::Error),

    /// ローカルファイルの読み込み、またはレスポンス本文の読み込みに失敗
    #[error(transparent)]
    ByteStream(#[from] ByteStreamError),
}

/// S3 互換ストレージへの ObjectStore
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// 既存の client を使う
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// 設定から client を組み立てる（認証情報は AWS のデフォルトチェーンから）
    pub async fn from_config(config: &S3Config) -> Self {
        Self::new(config.build_client().await)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn summary_from_object(object: Object) -> Option<ObjectSummary> {
    let size = object.size.and_then(|size| u64::try_from(size).ok());
    let key = object.key?;
    Some(ObjectSummary { key, size })
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    type Error = S3StoreError;

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, Self::Error> {
        debug!(bucket, key, "GetObject");

        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(aws_sdk_s3::Error::from)?;

        let body = resp.body.collect().await?;
        Ok(body.into_bytes().to_vec())
    }

    async fn upload_file(
        &self,
        file_path: &Path,
        bucket: &str,
        key: &str,
    ) -> Result<(), Self::Error> {
        debug!(path = %file_path.display(), bucket, key, "PutObject from file");

        let body = ByteStream::from_path(file_path).await?;
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(aws_sdk_s3::Error::from)?;

        Ok(())
    }

    async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<ListPage, Self::Error> {
        debug!(bucket, prefix, "ListObjectsV2");

        let resp = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix)
            .send()
            .await
            .map_err(aws_sdk_s3::Error::from)?;

        Ok(ListPage {
            is_truncated: resp.is_truncated.unwrap_or(false),
            contents: resp
                .contents
                .map(|objects| objects.into_iter().filter_map(summary_from_object).collect()),
        })
    }
}
