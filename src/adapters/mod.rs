// Adapters layer: concrete implementations for external systems
// (model API, structured sink, object storage).

pub mod gemini;
pub mod http_sink;
pub mod local;
pub mod s3;

pub use gemini::GeminiClient;
pub use http_sink::HttpRecordSink;
pub use local::LocalObjectStore;
#[cfg(feature = "lambda")]
pub use s3::S3ObjectStore;
