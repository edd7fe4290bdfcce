use super::{DEFAULT_LOGO_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_WORK_DIR};
use super::{LOGO_EXTENSIONS, OUTPUT_EXTENSIONS};
use crate::domain::model::EncodeSettings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use std::env;

/// Configuration of the request handler. Encoding settings are always the
/// fixed defaults; only the file locations come from the environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub work_dir: String,
    pub logo_path: String,
    pub output_path: String,
    pub settings: EncodeSettings,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            work_dir: DEFAULT_WORK_DIR.to_string(),
            logo_path: DEFAULT_LOGO_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            settings: EncodeSettings::default(),
        }
    }
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            work_dir: env::var("QR_WORK_DIR").unwrap_or_else(|_| DEFAULT_WORK_DIR.to_string()),
            logo_path: env::var("QR_LOGO_PATH").unwrap_or_else(|_| DEFAULT_LOGO_PATH.to_string()),
            output_path: env::var("QR_OUTPUT_PATH")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string()),
            settings: EncodeSettings::default(),
        })
    }

    pub fn with_work_dir(mut self, work_dir: impl Into<String>) -> Self {
        self.work_dir = work_dir.into();
        self
    }
}

impl ConfigProvider for LambdaConfig {
    fn logo_path(&self) -> &str {
        &self.logo_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn settings(&self) -> &EncodeSettings {
        &self.settings
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_path("QR_WORK_DIR", &self.work_dir)?;
        validate_path("QR_LOGO_PATH", &self.logo_path)?;
        validate_file_extension("QR_LOGO_PATH", &self.logo_path, LOGO_EXTENSIONS)?;
        validate_path("QR_OUTPUT_PATH", &self.output_path)?;
        validate_file_extension("QR_OUTPUT_PATH", &self.output_path, OUTPUT_EXTENSIONS)?;
        self.settings.validate()?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
