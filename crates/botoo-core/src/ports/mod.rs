//! Ports - 抽象化レイヤー
//!
//! 外部のストレージサービスへのインターフェースを trait として定義し、
//! facade が特定のクライアントの呼び出し形に依存しないようにします。

pub mod object_store;

pub use self::object_store::ObjectStore;
