use crate::core::aggregate::build_record;
use crate::core::artifact::upload_image;
use crate::core::imagegen::generate_image;
use crate::core::parser::parse_rows;
use crate::core::quarantine::quarantine;
use crate::core::textgen::generate_copy;
use crate::domain::model::{
    ImageOutcome, ObjectEvent, ProductRow, ResultRecord, RunOutcome, RunReport,
    IMAGE_FAILED_PLACEHOLDER,
};
use crate::domain::ports::{ImageModel, ObjectStore, RecordSink, TextModel};
use crate::utils::error::Result;
use chrono::Utc;

/// Containers the pipeline writes to. The input container arrives with
/// each trigger event.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub image_container: String,
    pub failed_container: Option<String>,
}

/// Drives one file run: download, parse, generate per row, upload
/// artifacts, aggregate, bulk insert. File-level errors quarantine the
/// source object; row-level errors only degrade that row's fields.
pub struct ContentPipeline<S, T, I, K>
where
    S: ObjectStore,
    T: TextModel,
    I: ImageModel,
    K: RecordSink,
{
    store: S,
    text_model: T,
    image_model: I,
    sink: K,
    settings: PipelineSettings,
}

impl<S, T, I, K> ContentPipeline<S, T, I, K>
where
    S: ObjectStore,
    T: TextModel,
    I: ImageModel,
    K: RecordSink,
{
    pub fn new(store: S, text_model: T, image_model: I, sink: K, settings: PipelineSettings) -> Self {
        Self {
            store,
            text_model,
            image_model,
            sink,
            settings,
        }
    }

    /// Runs the whole pipeline for one trigger event. Never returns an
    /// error: every failure ends in either a quarantined or a committed
    /// run, and the report goes back to the trigger handler.
    pub async fn run(&self, event: &ObjectEvent) -> RunReport {
        let source_uri = self
            .store
            .object_uri(&event.container_id, &event.object_id);
        tracing::info!(object = %event.object_id, "Processing new input object");

        // Parsing is the only fallible scope; anything that goes wrong
        // here is file-level fatal and sends the object to quarantine.
        let rows = match self.load_rows(event).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(object = %event.object_id, error = %e, "File-level failure, quarantining");
                quarantine(
                    &self.store,
                    &event.container_id,
                    &event.object_id,
                    self.settings.failed_container.as_deref(),
                )
                .await;
                return RunReport {
                    outcome: RunOutcome::Quarantined,
                    records_processed: 0,
                    source_uri,
                };
            }
        };

        tracing::info!(object = %event.object_id, rows = rows.len(), "Parsed input rows");

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(self.process_row(row, &source_uri).await);
        }

        if records.is_empty() {
            tracing::warn!(object = %event.object_id, "No valid rows found; nothing to insert");
            return RunReport {
                outcome: RunOutcome::Committed,
                records_processed: 0,
                source_uri,
            };
        }

        // The source file is fully consumed at this point, so insert
        // errors are logged without quarantining.
        if let Err(e) = self.sink.insert_all(&records).await {
            tracing::error!(object = %event.object_id, error = %e, "Bulk insert into sink failed");
        } else {
            tracing::info!(object = %event.object_id, records = records.len(), "Records inserted into sink");
        }

        RunReport {
            outcome: RunOutcome::Committed,
            records_processed: records.len(),
            source_uri,
        }
    }

    async fn load_rows(&self, event: &ObjectEvent) -> Result<Vec<ProductRow>> {
        let bytes = self
            .store
            .download(&event.container_id, &event.object_id)
            .await?;
        parse_rows(&bytes, &event.object_id)
    }

    /// Text, then (gated) image, then artifact upload, reduced to one
    /// record. Nothing here unwinds past the row boundary.
    async fn process_row(&self, row: &ProductRow, source_uri: &str) -> ResultRecord {
        let text = generate_copy(&self.text_model, row).await;
        let image = generate_image(&self.image_model, row, &text).await;

        let image_url = match image {
            ImageOutcome::Success(bytes) => {
                match upload_image(
                    &self.store,
                    &self.settings.image_container,
                    &row.name,
                    &bytes,
                )
                .await
                {
                    Ok(url) => url,
                    Err(e) => {
                        // Upload problems count as image failures.
                        tracing::error!(product = %row.name, error = %e, "Image upload failed");
                        IMAGE_FAILED_PLACEHOLDER.to_string()
                    }
                }
            }
            ImageOutcome::Skipped(message) | ImageOutcome::Failed(message) => message,
            ImageOutcome::Blocked => IMAGE_FAILED_PLACEHOLDER.to_string(),
        };

        build_record(row, text.display_text(), image_url, source_uri, Utc::now())
    }
}
