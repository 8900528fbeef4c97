//! Impls - ObjectStore の実装
//!
//! # 含まれる実装
//! - **S3ObjectStore**: aws-sdk-s3 を使う本番用
//! - **InMemoryObjectStore**: テスト・開発用のフェイク

pub mod inmem_store;
pub mod s3_store;

pub use self::inmem_store::{InMemoryObjectStore, InMemoryStoreError, StoreFault};
pub use self::s3_store::{S3ObjectStore, S3StoreError};
