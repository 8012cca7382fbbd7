use crate::domain::ports::ObjectStore;
use crate::utils::error::{PipelineError, Result};
use std::fs;
use std::path::PathBuf;

/// Filesystem-backed object store for local runs and tests. Containers
/// map to subdirectories of the base path.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    base_path: PathBuf,
}

impl LocalObjectStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn object_path(&self, container: &str, object: &str) -> PathBuf {
        self.base_path.join(container).join(object)
    }

    /// Synchronous write used to seed input objects.
    pub fn write_direct(&self, container: &str, object: &str, data: &[u8]) -> Result<()> {
        let path = self.object_path(container, object);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}

impl ObjectStore for LocalObjectStore {
    async fn download(&self, container: &str, object: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.object_path(container, object))?;
        Ok(data)
    }

    async fn upload(
        &self,
        container: &str,
        object: &str,
        data: &[u8],
        _content_type: &str,
    ) -> Result<()> {
        self.write_direct(container, object, data)
    }

    async fn copy(&self, src_container: &str, object: &str, dst_container: &str) -> Result<()> {
        let src = self.object_path(src_container, object);
        let dst = self.object_path(dst_container, object);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, &dst).map_err(|e| PipelineError::StorageError {
            message: format!("Failed to copy {}: {}", src.display(), e),
        })?;
        Ok(())
    }

    async fn delete(&self, container: &str, object: &str) -> Result<()> {
        fs::remove_file(self.object_path(container, object))?;
        Ok(())
    }

    fn public_url(&self, container: &str, object: &str) -> String {
        format!(
            "file://{}",
            self.object_path(container, object).display()
        )
    }

    fn object_uri(&self, container: &str, object: &str) -> String {
        format!(
            "file://{}",
            self.object_path(container, object).display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = LocalObjectStore::new(dir.path().to_path_buf());

        store
            .upload("images", "widget_1.png", b"\x89PNG", "image/png")
            .await
            .unwrap();
        let data = store.download("images", "widget_1.png").await.unwrap();

        assert_eq!(data, b"\x89PNG");
    }

    #[tokio::test]
    async fn test_copy_and_delete() {
        let dir = TempDir::new().unwrap();
        let store = LocalObjectStore::new(dir.path().to_path_buf());
        store.write_direct("input", "a.csv", b"x").unwrap();

        store.copy("input", "a.csv", "failed").await.unwrap();
        store.delete("input", "a.csv").await.unwrap();

        assert!(!dir.path().join("input/a.csv").exists());
        assert!(dir.path().join("failed/a.csv").exists());
    }

    #[tokio::test]
    async fn test_download_missing_is_err() {
        let dir = TempDir::new().unwrap();
        let store = LocalObjectStore::new(dir.path().to_path_buf());

        assert!(store.download("input", "missing.csv").await.is_err());
    }
}
