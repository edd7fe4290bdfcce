use crate::domain::model::{EncodeSettings, QrArtifact};
use crate::utils::error::Result;
use async_trait::async_trait;
use image::GrayImage;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn logo_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn settings(&self) -> &EncodeSettings;
    fn embed_logo(&self) -> bool {
        true
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn encode(&self, url: &str) -> Result<GrayImage>;
    async fn compose(&self, code: GrayImage) -> Result<QrArtifact>;
    async fn load(&self, artifact: QrArtifact) -> Result<String>;
}
