//! InMemoryObjectStore - テスト・開発用の ObjectStore
//!
//! # 特徴
//! - bucket ごとに `BTreeMap<key, bytes>`（S3 と同じく辞書順で一覧）
//! - `max_keys` を指定すると 1 ページの件数を制限し、`is_truncated` を立てる
//! - `StoreFault` で認証エラーなどを注入できる

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::{ListPage, ObjectSummary};
use crate::ports::ObjectStore;

/// InMemoryObjectStore のエラー
#[derive(Debug, thiserror::Error)]
pub enum InMemoryStoreError {
    #[error("unable to locate credentials")]
    NoCredentials,

    #[error("access denied to bucket {bucket}")]
    AccessDenied { bucket: String },

    #[error("bucket not found: {0}")]
    NoSuchBucket(String),

    #[error("object not found: {bucket}/{key}")]
    NoSuchKey { bucket: String, key: String },

    #[error("failed to read local file: {0}")]
    Io(#[from] std::io::Error),
}

/// 全操作を失敗させるための注入用エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFault {
    NoCredentials,
    AccessDenied,
}

type Bucket = BTreeMap<String, Vec<u8>>;

/// InMemoryObjectStore は開発用の ObjectStore
///
/// # 使用例
/// ```ignore
/// let store = InMemoryObjectStore::new();
/// store.put_object("bucket", "raw/a.csv", b"x".to_vec());
/// let keys = list_keys_under_prefix(&store, "bucket", "raw").await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryObjectStore {
    buckets: Mutex<HashMap<String, Bucket>>,
    max_keys: Option<usize>,
    fault: Option<StoreFault>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 ページあたりの最大件数（S3 の MaxKeys 相当）
    pub fn with_max_keys(mut self, max_keys: usize) -> Self {
        self.max_keys = Some(max_keys);
        self
    }

    pub fn with_fault(mut self, fault: StoreFault) -> Self {
        self.fault = Some(fault);
        self
    }

    /// bucket を作成（既にあれば何もしない）
    pub fn create_bucket(&self, bucket: &str) {
        self.lock().entry(bucket.to_string()).or_default();
    }

    /// オブジェクトを直接配置する（bucket がなければ作成）
    pub fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) {
        self.lock()
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), body);
    }

    pub fn object_count(&self, bucket: &str) -> usize {
        self.lock().get(bucket).map_or(0, BTreeMap::len)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Bucket>> {
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_fault(&self, bucket: &str) -> Result<(), InMemoryStoreError> {
        match self.fault {
            Some(StoreFault::NoCredentials) => Err(InMemoryStoreError::NoCredentials),
            Some(StoreFault::AccessDenied) => Err(InMemoryStoreError::AccessDenied {
                bucket: bucket.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    type Error = InMemoryStoreError;

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, Self::Error> {
        self.check_fault(bucket)?;

        let buckets = self.lock();
        let objects = buckets
            .get(bucket)
            .ok_or_else(|| InMemoryStoreError::NoSuchBucket(bucket.to_string()))?;
        objects
            .get(key)
            .cloned()
            .ok_or_else(|| InMemoryStoreError::NoSuchKey {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn upload_file(
        &self,
        file_path: &Path,
        bucket: &str,
        key: &str,
    ) -> Result<(), Self::Error> {
        self.check_fault(bucket)?;
        if !self.lock().contains_key(bucket) {
            return Err(InMemoryStoreError::NoSuchBucket(bucket.to_string()));
        }

        let body = tokio::fs::read(file_path).await?;

        let mut buckets = self.lock();
        let objects = buckets
            .get_mut(bucket)
            .ok_or_else(|| InMemoryStoreError::NoSuchBucket(bucket.to_string()))?;
        objects.insert(key.to_string(), body);
        Ok(())
    }

    async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<ListPage, Self::Error> {
        self.check_fault(bucket)?;

        let buckets = self.lock();
        let objects = buckets
            .get(bucket)
            .ok_or_else(|| InMemoryStoreError::NoSuchBucket(bucket.to_string()))?;

        let limit = self.max_keys.unwrap_or(usize::MAX);
        let mut matching = objects
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, body)| ObjectSummary::new(key.clone()).with_size(body.len() as u64));

        let contents: Vec<_> = matching.by_ref().take(limit).collect();
        let is_truncated = matching.next().is_some();

        // S3 は一致するオブジェクトがないと Contents 自体を返さない
        if contents.is_empty() {
            return Ok(ListPage::default());
        }
        Ok(ListPage::new(contents).truncated(is_truncated))
    }
}
