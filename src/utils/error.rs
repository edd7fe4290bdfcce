use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("URL is too long for QR version {version}")]
    UrlTooLong { version: i16 },

    #[error("QR encoding failed: {0}")]
    Encoding(String),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Decoded payload is not ASCII")]
    NonAscii,

    #[error("Invalid image dimensions: {message}")]
    InvalidDimensions { message: String },

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Encoding,
    Imaging,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl QrError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QrError::UrlTooLong { .. } | QrError::Encoding(_) => ErrorCategory::Encoding,
            QrError::Decode(_) | QrError::NonAscii => ErrorCategory::Input,
            QrError::InvalidDimensions { .. } | QrError::Image(_) => ErrorCategory::Imaging,
            QrError::IoError(_) | QrError::SerializationError(_) => ErrorCategory::Io,
            QrError::TomlError(_) | QrError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Encoding | ErrorCategory::Imaging => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QrError::UrlTooLong { .. } => "Shorten the URL, e.g. with a link shortener",
            QrError::Encoding(_) => "Check that the payload is valid text",
            QrError::Decode(_) | QrError::NonAscii => {
                "Encode the url parameter with URL-safe base64"
            }
            QrError::InvalidDimensions { .. } => {
                "Use a square logo and a logo scale between 0 and 1"
            }
            QrError::Image(_) => "Check that the logo file is a readable PNG or JPEG image",
            QrError::IoError(_) => "Check that the paths exist and are writable",
            QrError::SerializationError(_) => "Report this as a bug",
            QrError::TomlError(_) => "Fix the syntax of the configuration file",
            QrError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and config file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QrError::UrlTooLong { .. } => "URL is too long.".to_string(),
            QrError::Image(_) => format!("Could not process image: {}", self),
            QrError::IoError(e) => format!("File operation failed: {}", e),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QrError>;
