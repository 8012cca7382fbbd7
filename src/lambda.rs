#[cfg(feature = "lambda")]
use aws_config::BehaviorVersion;
#[cfg(feature = "lambda")]
use aws_sdk_s3::config::Region;
#[cfg(feature = "lambda")]
use aws_sdk_s3::Client as S3Client;
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use promo_etl::adapters::S3ObjectStore;
#[cfg(feature = "lambda")]
use promo_etl::core::pipeline::{ContentPipeline, PipelineSettings};
#[cfg(feature = "lambda")]
use promo_etl::domain::model::{ObjectEvent, RunOutcome};
#[cfg(feature = "lambda")]
use promo_etl::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use promo_etl::{GeminiClient, HttpRecordSink, RunnerConfig};
#[cfg(feature = "lambda")]
use serde::Serialize;

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub outcome: Option<RunOutcome>,
    pub records_processed: usize,
}

/// One invocation per uploaded object. Clients are constructed here,
/// after config load, and dropped when the invocation ends; failures
/// are logged and acknowledged rather than re-raised to the platform,
/// so a bad file is not redelivered forever.
#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<ObjectEvent>) -> Result<Response, Error> {
    tracing::info!(object = %event.payload.object_id, "Trigger received");

    let config = match RunnerConfig::from_env().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration error, aborting invocation");
            return Ok(Response {
                message: format!("Configuration error: {}", e),
                outcome: None,
                records_processed: 0,
            });
        }
    };

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .region(Region::new(config.region.clone()))
        .build();
    let store = S3ObjectStore::new(S3Client::from_conf(s3_config), config.region.clone());

    let models = GeminiClient::new(
        config.api_base.clone(),
        config.api_key.clone(),
        config.text_model.clone(),
        config.image_model.clone(),
    );
    let sink = HttpRecordSink::new(config.sink_endpoint.clone(), config.api_key.clone());

    let settings = PipelineSettings {
        image_container: config.image_container.clone(),
        failed_container: config.failed_container.clone(),
    };
    let pipeline = ContentPipeline::new(store, models.clone(), models, sink, settings);

    let report = pipeline.run(&event.payload).await;

    let message = match report.outcome {
        RunOutcome::Committed => "File processed".to_string(),
        RunOutcome::Quarantined => "File quarantined".to_string(),
    };

    Ok(Response {
        message,
        outcome: Some(report.outcome),
        records_processed: report.records_processed,
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
