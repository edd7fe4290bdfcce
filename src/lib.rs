pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::handler::{handle_request, ApiRequest};
pub use config::lambda::LambdaConfig;
pub use crate::core::{engine::QrEngine, pipeline::BrandQrPipeline};
pub use domain::model::{EncodeSettings, HandlerResponse};
pub use utils::error::{QrError, Result};
