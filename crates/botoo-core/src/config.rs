//! S3 client configuration.

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use tracing::info;

/// S3 client の設定
///
/// すべて省略可能です。省略した項目は AWS のデフォルト
/// （環境変数、`~/.aws/config`、インスタンスメタデータ）に従います。
/// 認証情報は botoo 側では扱いません。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3Config {
    /// MinIO や localstack などの S3 互換エンドポイント
    pub endpoint_url: Option<String>,
    pub region: Option<String>,
    /// `~/.aws/config` のプロファイル名
    pub profile: Option<String>,
    /// `http://host/bucket/key` 形式でアクセスする（MinIO では必須）
    pub force_path_style: bool,
}

impl S3Config {
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// aws-config のデフォルトチェーンを読み込み、設定を上書きして client を作る
    pub async fn build_client(&self) -> Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(self.force_path_style);
        if let Some(endpoint_url) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }

        info!(
            endpoint = self.endpoint_url.as_deref().unwrap_or("default"),
            region = ?sdk_config.region(),
            force_path_style = self.force_path_style,
            "S3 client initialized"
        );

        Client::from_conf(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_aws_defaults() {
        let config = S3Config::default();
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.region, None);
        assert_eq!(config.profile, None);
        assert!(!config.force_path_style);
    }

    #[test]
    fn builder_methods_set_fields() {
        let config = S3Config::default()
            .with_endpoint_url("http://localhost:9000")
            .with_region("eu-west-2")
            .with_profile("dev")
            .with_force_path_style(true);

        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.region.as_deref(), Some("eu-west-2"));
        assert_eq!(config.profile.as_deref(), Some("dev"));
        assert!(config.force_path_style);
    }

    #[tokio::test]
    async fn build_client_applies_overrides() {
        let config = S3Config::default()
            .with_endpoint_url("http://localhost:9000")
            .with_region("eu-west-2")
            .with_force_path_style(true);

        let client = config.build_client().await;
        let region = client.config().region().map(ToString::to_string);
        assert_eq!(region.as_deref(), Some("eu-west-2"));
    }
}
