use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Filesystem storage rooted at `base_path`. Relative paths resolve against it.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}
