#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

pub const DEFAULT_URL: &str = "https://example.com";
pub const DEFAULT_LOGO_PATH: &str = "logo.png";
pub const DEFAULT_OUTPUT_PATH: &str = "qr.png";
pub const DEFAULT_WORK_DIR: &str = ".";

pub const LOGO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
pub const OUTPUT_EXTENSIONS: &[&str] = &["png"];
