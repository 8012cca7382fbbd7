#[cfg(feature = "lambda")]
use crate::domain::ports::ObjectStore;
#[cfg(feature = "lambda")]
use crate::utils::error::{PipelineError, Result};
#[cfg(feature = "lambda")]
use aws_sdk_s3::Client as S3Client;

/// Object store backed by S3-compatible buckets. Containers map to
/// buckets; the image bucket is expected to allow public reads.
#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: S3Client,
    region: String,
}

#[cfg(feature = "lambda")]
impl S3ObjectStore {
    pub fn new(client: S3Client, region: String) -> Self {
        Self { client, region }
    }
}

#[cfg(feature = "lambda")]
impl ObjectStore for S3ObjectStore {
    async fn download(&self, container: &str, object: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get_object()
            .bucket(container)
            .key(object)
            .send()
            .await
            .map_err(|e| PipelineError::StorageError {
                message: format!("Failed to read {}/{}: {}", container, object, e),
            })?;

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| PipelineError::StorageError {
                message: format!("Failed to collect body of {}/{}: {}", container, object, e),
            })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn upload(
        &self,
        container: &str,
        object: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(container)
            .key(object)
            .content_type(content_type)
            .body(data.to_vec().into())
            .send()
            .await
            .map_err(|e| PipelineError::StorageError {
                message: format!("Failed to write {}/{}: {}", container, object, e),
            })?;

        Ok(())
    }

    async fn copy(&self, src_container: &str, object: &str, dst_container: &str) -> Result<()> {
        self.client
            .copy_object()
            .copy_source(format!("{}/{}", src_container, object))
            .bucket(dst_container)
            .key(object)
            .send()
            .await
            .map_err(|e| PipelineError::StorageError {
                message: format!(
                    "Failed to copy {}/{} to {}: {}",
                    src_container, object, dst_container, e
                ),
            })?;

        Ok(())
    }

    async fn delete(&self, container: &str, object: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(container)
            .key(object)
            .send()
            .await
            .map_err(|e| PipelineError::StorageError {
                message: format!("Failed to delete {}/{}: {}", container, object, e),
            })?;

        Ok(())
    }

    fn public_url(&self, container: &str, object: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            container, self.region, object
        )
    }

    fn object_uri(&self, container: &str, object: &str) -> String {
        format!("s3://{}/{}", container, object)
    }
}
