use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct QrEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> QrEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Encodes `url`, composites the logo and writes the image. Returns the
    /// path the image was written to.
    pub async fn run(&self, url: &str) -> Result<String> {
        tracing::info!("Encoding {} characters", url.len());
        let code = self.pipeline.encode(url).await?;
        tracing::debug!("Encoded image {:?}", code.dimensions());

        let artifact = self.pipeline.compose(code).await?;
        tracing::debug!("Composed image {:?}", artifact.dimensions());

        let output_path = self.pipeline.load(artifact).await?;
        tracing::info!("QR code saved to: {}", output_path);

        Ok(output_path)
    }
}
