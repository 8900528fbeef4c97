use std::path::PathBuf;

use anyhow::Context;
use botoo_core::observability::init_tracing;
use botoo_core::{
    S3Config, S3ObjectStore, fetch_object_as_text, list_keys_under_prefix, upload_local_file,
};
use clap::{Parser, Subcommand};

/// Read, upload and list objects in S3-compatible storage.
///
/// Credentials come from the standard AWS provider chain.
#[derive(Debug, Parser)]
#[command(name = "botoo", version, about)]
struct Cli {
    /// S3-compatible endpoint (MinIO, localstack, ...)
    #[arg(long, env = "BOTOO_ENDPOINT_URL", global = true)]
    endpoint_url: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION", global = true)]
    region: Option<String>,

    /// Profile name from ~/.aws/config
    #[arg(long, env = "AWS_PROFILE", global = true)]
    profile: Option<String>,

    /// Use path-style addressing (http://host/bucket/key)
    #[arg(long, env = "BOTOO_FORCE_PATH_STYLE", global = true)]
    force_path_style: bool,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Use JSON log format
    #[arg(long, env = "JSON_LOGS", global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print an object's content as UTF-8 text
    Cat { bucket: String, key: String },

    /// Upload a local file
    Put {
        file: PathBuf,
        bucket: String,
        key: String,
    },

    /// List file keys under a prefix (first page only, folder markers skipped)
    Ls {
        bucket: String,
        /// Key prefix (all keys when omitted)
        prefix: Option<String>,

        /// Print keys as a JSON array
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn s3_config(&self) -> S3Config {
        S3Config {
            endpoint_url: self.endpoint_url.clone(),
            region: self.region.clone(),
            profile: self.profile.clone(),
            force_path_style: self.force_path_style,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs).context("failed to initialize logging")?;

    let store = S3ObjectStore::from_config(&cli.s3_config()).await;

    match cli.command {
        Command::Cat { bucket, key } => {
            let text = fetch_object_as_text(&store, &bucket, &key)
                .await
                .with_context(|| format!("failed to fetch s3://{bucket}/{key}"))?;
            print!("{text}");
        }
        Command::Put { file, bucket, key } => {
            upload_local_file(&store, &file, &bucket, &key)
                .await
                .with_context(|| {
                    format!("failed to upload {} to s3://{bucket}/{key}", file.display())
                })?;
            tracing::info!(bucket = %bucket, key = %key, "upload complete");
        }
        Command::Ls {
            bucket,
            prefix,
            json,
        } => {
            let prefix = prefix.unwrap_or_default();
            let keys = list_keys_under_prefix(&store, &bucket, &prefix)
                .await
                .with_context(|| format!("failed to list s3://{bucket}/{prefix}"))?;
            if json {
                println!("{}", serde_json::to_string(&keys)?);
            } else {
                for key in keys {
                    println!("{key}");
                }
            }
        }
    }

    Ok(())
}
