use ad_forge_core::envelope::ResultEnvelope;
use ad_forge_lambda::adapters::http_client::HttpForgeClient;
use ad_forge_lambda::config::ForgeConfig;
use ad_forge_lambda::handlers::create_ad::handle_create_ad_event;
use ad_forge_lambda::telemetry;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ResultEnvelope, Error> {
    let config = ForgeConfig::from_env().map_err(|error| Error::from(error.to_string()))?;

    // The blocking client must stay off the async worker threads.
    tokio::task::spawn_blocking(move || {
        handle_create_ad_event(event.payload, || HttpForgeClient::new(config))
    })
    .await
    .map_err(|error| Error::from(format!("create-ad task failed: {error}")))?
    .map_err(|error| Error::from(error.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    lambda_runtime::run(service_fn(handle_request)).await
}
