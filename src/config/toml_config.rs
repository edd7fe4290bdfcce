use crate::domain::model::{EncodeSettings, ErrorCorrection};
use crate::utils::error::{QrError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QrConfig {
    pub encoding: Option<EncodingConfig>,
    pub paths: Option<PathsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodingConfig {
    pub version: Option<i16>,
    pub error_correction: Option<ErrorCorrection>,
    pub module_size: Option<u32>,
    pub border: Option<u32>,
    pub logo_scale: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub logo: Option<String>,
    pub output: Option<String>,
}

impl QrConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QrError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// 未設定的欄位使用預設值
    pub fn settings(&self) -> EncodeSettings {
        let defaults = EncodeSettings::default();
        match &self.encoding {
            Some(enc) => EncodeSettings {
                version: enc.version.unwrap_or(defaults.version),
                error_correction: enc.error_correction.unwrap_or(defaults.error_correction),
                module_size: enc.module_size.unwrap_or(defaults.module_size),
                border: enc.border.unwrap_or(defaults.border),
                logo_scale: enc.logo_scale.unwrap_or(defaults.logo_scale),
            },
            None => defaults,
        }
    }

    pub fn logo_path(&self) -> Option<&str> {
        self.paths.as_ref().and_then(|p| p.logo.as_deref())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.paths.as_ref().and_then(|p| p.output.as_deref())
    }
}

impl Validate for QrConfig {
    fn validate(&self) -> Result<()> {
        self.settings().validate()?;

        if let Some(logo) = self.logo_path() {
            validate_path("paths.logo", logo)?;
        }
        if let Some(output) = self.output_path() {
            validate_path("paths.output", output)?;
        }

        Ok(())
    }
}
