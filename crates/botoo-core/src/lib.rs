//! botoo-core
//!
//! Object storage への薄いアクセス層。
//!
//! # モジュール構成
//! - **domain**: 転送用の型（ObjectSummary, ListPage, FetchTextError）
//! - **ports**: 抽象化レイヤー（ObjectStore）
//! - **facade**: 3 つの操作（fetch_object_as_text, upload_local_file, list_keys_under_prefix）
//! - **impls**: 実装（S3ObjectStore, InMemoryObjectStore）
//! - **config**: S3 クライアントの設定
//! - **observability**: tracing の初期化

pub mod config;
pub mod domain;
pub mod facade;
pub mod impls;
pub mod observability;
pub mod ports;

pub use config::S3Config;
pub use domain::{FetchTextError, ListPage, ObjectSummary};
pub use facade::{fetch_object_as_text, list_keys, list_keys_under_prefix, upload_local_file};
pub use impls::{InMemoryObjectStore, S3ObjectStore};
pub use ports::ObjectStore;
