pub mod compositor;
pub mod decoder;
pub mod encoder;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{EncodeSettings, QrArtifact};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
