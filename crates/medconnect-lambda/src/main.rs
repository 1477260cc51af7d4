use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use medconnect_lambda::config::LambdaConfig;
use medconnect_lambda::router;
use medconnect_lambda::state::AppState;
use medconnect_storage::s3::S3Store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = LambdaConfig::from_env()?;
    tracing::info!(bucket = %config.bucket, doctors_key = %config.doctors_key, "starting");

    let s3 = medconnect_storage::client::build_client().await;
    let store = Arc::new(
        S3Store::new(s3, config.bucket.clone()).with_doctor_list_key(config.doctors_key.clone()),
    );
    let state = AppState::new(store.clone(), store, config.timezone);

    lambda_http::run(router(state)).await.map_err(|e| eyre::eyre!(e))
}
