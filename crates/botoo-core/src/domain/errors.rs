//! Errors - facade が返すエラー型
//!
//! ストレージ側のエラーは変換せずにそのまま返します。
//! facade 自身が増やすのは UTF-8 デコード失敗だけです。

use std::string::FromUtf8Error;

/// fetch_object_as_text のエラー
///
/// - `Store`: ObjectStore が返したエラーそのもの
/// - `Decode`: 本文が UTF-8 ではなかった
#[derive(Debug, thiserror::Error)]
pub enum FetchTextError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Store(E),

    #[error("object body is not valid UTF-8: {0}")]
    Decode(#[source] FromUtf8Error),
}

impl<E> FetchTextError<E>
where
    E: std::error::Error + 'static,
{
    /// ストレージ側のエラーであればそれを取り出す
    pub fn into_store_error(self) -> Option<E> {
        match self {
            Self::Store(err) => Some(err),
            Self::Decode(_) => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
