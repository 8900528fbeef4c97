//! Storage Access Facade
//!
//! ObjectStore に対する 3 つの入口。どれも 1 回のリクエストをそのまま転送し、
//! 結果を少しだけ整形して返します。
//!
//! - fetch_object_as_text: 本文を UTF-8 文字列として取得
//! - upload_local_file: ローカルファイルをアップロード
//! - list_keys_under_prefix: prefix 配下の key 一覧（folder marker を除外）

use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::FetchTextError;
use crate::ports::ObjectStore;

/// オブジェクトの本文を取得して UTF-8 文字列として返す
///
/// ストアのエラー（not found, access denied, no credentials など）は
/// `FetchTextError::Store` にそのまま入って返ります。
pub async fn fetch_object_as_text<S>(
    store: &S,
    bucket: &str,
    key: &str,
) -> Result<String, FetchTextError<S::Error>>
where
    S: ObjectStore + ?Sized,
{
    debug!(bucket, key, "Fetching object as text");

    let body = store
        .get_object(bucket, key)
        .await
        .map_err(FetchTextError::Store)?;

    String::from_utf8(body).map_err(FetchTextError::Decode)
}

/// ローカルファイルを `bucket/key` にアップロードする
///
/// 引数はそのままストアに渡します。アップロード後の検証はしません。
pub async fn upload_local_file<S>(
    store: &S,
    file_path: impl AsRef<Path>,
    bucket: &str,
    key: &str,
) -> Result<(), S::Error>
where
    S: ObjectStore + ?Sized,
{
    let file_path = file_path.as_ref();
    debug!(path = %file_path.display(), bucket, key, "Uploading local file");

    store.upload_file(file_path, bucket, key).await?;

    info!(path = %file_path.display(), bucket, key, "File uploaded");
    Ok(())
}

/// prefix 配下の key を返す（folder marker は除外、順序はプロバイダのまま）
///
/// 一覧は 1 ページ分だけです。続きがある場合は warn ログを出して
/// 最初のページだけを返します。
pub async fn list_keys_under_prefix<S>(
    store: &S,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, S::Error>
where
    S: ObjectStore + ?Sized,
{
    debug!(bucket, prefix, "Listing keys");

    let page = store.list_objects(bucket, prefix).await?;
    if page.is_truncated {
        warn!(
            bucket,
            prefix, "Listing is truncated; only the first page is returned"
        );
    }

    Ok(page.into_file_keys())
}

/// bucket 内の全 key（prefix なし）
pub async fn list_keys<S>(store: &S, bucket: &str) -> Result<Vec<String>, S::Error>
where
    S: ObjectStore + ?Sized,
{
    list_keys_under_prefix(store, bucket, "").await
}
