use crate::core::compositor::place_logo;
use crate::core::encoder::create_qr;
use crate::core::{ConfigProvider, Pipeline, QrArtifact, Storage};
use crate::utils::error::Result;
use image::{DynamicImage, GrayImage, ImageFormat};
use std::io::Cursor;

pub struct BrandQrPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BrandQrPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BrandQrPipeline<S, C> {
    async fn encode(&self, url: &str) -> Result<GrayImage> {
        create_qr(url, self.config.settings())
    }

    async fn compose(&self, code: GrayImage) -> Result<QrArtifact> {
        if !self.config.embed_logo() {
            tracing::debug!("Logo disabled, keeping plain QR code");
            return Ok(QrArtifact::Plain(code));
        }

        let bytes = self.storage.read_file(self.config.logo_path()).await?;
        let logo = image::load_from_memory(&bytes)?;
        tracing::debug!(
            "Loaded logo {} ({}x{})",
            self.config.logo_path(),
            logo.width(),
            logo.height()
        );

        let base = DynamicImage::ImageLuma8(code);
        let branded = place_logo(&base, &logo, self.config.settings().logo_scale)?;
        Ok(QrArtifact::Branded(branded))
    }

    async fn load(&self, artifact: QrArtifact) -> Result<String> {
        let mut png = Vec::new();
        match &artifact {
            QrArtifact::Plain(img) => img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?,
            QrArtifact::Branded(img) => {
                img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?
            }
        }

        let output_path = self.config.output_path();
        self.storage.write_file(output_path, &png).await?;
        Ok(output_path.to_string())
    }
}
