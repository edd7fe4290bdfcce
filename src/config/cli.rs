use super::toml_config::QrConfig;
use super::{DEFAULT_LOGO_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_URL, DEFAULT_WORK_DIR};
use super::{LOGO_EXTENSIONS, OUTPUT_EXTENSIONS};
use crate::domain::model::EncodeSettings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "brand-qr")]
#[command(about = "Generate a QR code for a URL with a centered logo")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    #[arg(long, help = "Logo image, relative to --work-dir [default: logo.png]")]
    pub logo_path: Option<String>,

    #[arg(long, help = "Output PNG, relative to --work-dir [default: qr.png]")]
    pub output_path: Option<String>,

    #[arg(long, default_value = DEFAULT_WORK_DIR)]
    pub work_dir: String,

    #[arg(long, help = "Write the plain QR code without a logo")]
    pub no_logo: bool,

    #[arg(long, help = "TOML file with [encoding] and [paths] tables")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub settings: EncodeSettings,
}

impl CliConfig {
    /// Loads the `--config` file, if any. Flags given on the command line win
    /// over paths from the file.
    pub fn load_file(&mut self) -> Result<()> {
        let Some(path) = self.config.clone() else {
            return Ok(());
        };

        let file = QrConfig::from_file(&path)?;
        file.validate()?;
        tracing::debug!("Loaded config file {}: {:?}", path, file);

        self.settings = file.settings();
        if self.logo_path.is_none() {
            self.logo_path = file.logo_path().map(str::to_string);
        }
        if self.output_path.is_none() {
            self.output_path = file.output_path().map(str::to_string);
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn logo_path(&self) -> &str {
        self.logo_path.as_deref().unwrap_or(DEFAULT_LOGO_PATH)
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn settings(&self) -> &EncodeSettings {
        &self.settings
    }

    fn embed_logo(&self) -> bool {
        !self.no_logo
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("work_dir", &self.work_dir)?;
        validate_path("output_path", self.output_path())?;
        validate_file_extension("output_path", self.output_path(), OUTPUT_EXTENSIONS)?;

        if self.embed_logo() {
            validate_path("logo_path", self.logo_path())?;
            validate_file_extension("logo_path", self.logo_path(), LOGO_EXTENSIONS)?;
        }

        self.settings.validate()?;

        // Any text can be encoded; only warn when it is not a web link.
        if let Err(e) = validate_url("url", &self.url) {
            tracing::warn!("⚠️ {}; encoding it anyway", e);
        }

        Ok(())
    }
}
