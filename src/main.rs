use clap::Parser;
use promo_etl::core::pipeline::{ContentPipeline, PipelineSettings};
use promo_etl::domain::model::{ObjectEvent, RunOutcome};
use promo_etl::utils::{logger, validation::Validate};
use promo_etl::{CliConfig, GeminiClient, HttpRecordSink, LocalObjectStore};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting promo-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let store = LocalObjectStore::new(PathBuf::from(&config.base_dir));
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

    let event = ObjectEvent {
        container_id: config.input_container.clone(),
        object_id: config.object.clone(),
    };
    let report = pipeline.run(&event).await;

    match report.outcome {
        RunOutcome::Committed => {
            tracing::info!(
                records = report.records_processed,
                "File processed and committed"
            );
            println!(
                "Processed {} ({} records)",
                report.source_uri, report.records_processed
            );
        }
        RunOutcome::Quarantined => {
            tracing::error!(source = %report.source_uri, "File quarantined");
            eprintln!("File quarantined: {}", report.source_uri);
            std::process::exit(1);
        }
    }

    Ok(())
}
