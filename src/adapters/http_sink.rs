use crate::domain::model::ResultRecord;
use crate::domain::ports::RecordSink;
use crate::utils::error::{PipelineError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct InsertAllRequest<'a> {
    rows: Vec<InsertRow<'a>>,
}

#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    json: &'a ResultRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsertAllResponse {
    #[serde(default)]
    insert_errors: Vec<serde_json::Value>,
}

/// Streams records into the structured sink via an insertAll-style
/// endpoint. Append-only, no idempotency: redelivered trigger events
/// can insert duplicates.
#[derive(Debug, Clone)]
pub struct HttpRecordSink {
    client: Client,
    endpoint: String,
    credential: String,
}

impl HttpRecordSink {
    pub fn new(endpoint: String, credential: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            credential,
        }
    }
}

impl RecordSink for HttpRecordSink {
    async fn insert_all(&self, records: &[ResultRecord]) -> Result<()> {
        let request = InsertAllRequest {
            rows: records.iter().map(|json| InsertRow { json }).collect(),
        };

        tracing::debug!(records = records.len(), "Inserting records into sink");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.credential)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: InsertAllResponse = response.json().await?;
        if !body.insert_errors.is_empty() {
            return Err(PipelineError::SinkError {
                message: format!("{} row(s) rejected by sink", body.insert_errors.len()),
            });
        }

        Ok(())
    }
}
