use tracing_subscriber::EnvFilter;

use hypercare_lambda::app;
use hypercare_lambda::config::{Config, StoreKind};
use hypercare_lambda::state::AppState;
use hypercare_storage::store::StateStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    let store = match config.store {
        StoreKind::S3 => {
            let s3 = hypercare_storage::client::build_client().await;
            StateStore::s3(s3, config.bucket.clone())
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store, assessments are lost on cold start");
            StateStore::memory()
        }
    };
    tracing::info!(store = ?config.store, bucket = %config.bucket, "hypercare api starting");

    lambda_http::run(app(AppState::new(store)))
        .await
        .map_err(|e| eyre::eyre!(e))
}
