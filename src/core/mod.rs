pub mod aggregate;
pub mod artifact;
pub mod imagegen;
pub mod parser;
pub mod pipeline;
pub mod quarantine;
pub mod textgen;

pub use crate::domain::model::{
    ObjectEvent, ProductRow, ResultRecord, RunOutcome, RunReport, TextOutcome,
};
pub use crate::domain::ports::{ImageModel, ObjectStore, RecordSink, TextModel};
pub use crate::utils::error::Result;
