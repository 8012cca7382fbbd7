use crate::domain::model::ResultRecord;
use crate::utils::error::Result;
use std::future::Future;

/// One binary payload returned by the image model.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Object storage as seen by the pipeline: the input container, the
/// public image container, and the quarantine container all live behind
/// this trait.
pub trait ObjectStore: Send + Sync {
    fn download(
        &self,
        container: &str,
        object: &str,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;

    fn upload(
        &self,
        container: &str,
        object: &str,
        data: &[u8],
        content_type: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    fn copy(
        &self,
        src_container: &str,
        object: &str,
        dst_container: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    fn delete(&self, container: &str, object: &str) -> impl Future<Output = Result<()>> + Send;

    /// Public URL for an object in a publicly readable container.
    fn public_url(&self, container: &str, object: &str) -> String;

    /// URI identifying the source object, recorded in `source_file`.
    fn object_uri(&self, container: &str, object: &str) -> String;
}

/// Text-generation model. `Ok(Some(text))` is the first candidate,
/// `Ok(None)` means the safety filter left zero candidates, and `Err`
/// is a transport or API failure.
pub trait TextModel: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<Option<String>>> + Send;
}

/// Image-generation model. Returns every part of the response; the
/// caller picks the first binary one.
pub trait ImageModel: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<Vec<ImagePart>>> + Send;
}

/// Append-only structured sink receiving one record per parsed row.
pub trait RecordSink: Send + Sync {
    fn insert_all(&self, records: &[ResultRecord]) -> impl Future<Output = Result<()>> + Send;
}
