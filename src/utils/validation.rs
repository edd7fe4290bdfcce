use crate::domain::model::{EncodeSettings, MAX_BORDER, MAX_MODULE_SIZE};
use crate::utils::error::{QrError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(QrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(QrError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(QrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(QrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(QrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(QrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Scale is a fraction of the QR side length: strictly positive, at most 1.
pub fn validate_scale(field_name: &str, value: f64) -> Result<()> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(QrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Scale must be greater than 0 and at most 1".to_string(),
        });
    }
    Ok(())
}

impl Validate for EncodeSettings {
    fn validate(&self) -> Result<()> {
        validate_range("version", self.version, 1, 40)?;
        validate_range("module_size", self.module_size, 1, MAX_MODULE_SIZE)?;
        validate_range("border", self.border, 0, MAX_BORDER)?;
        validate_scale("logo_scale", self.logo_scale)?;
        self.image_side()?;
        Ok(())
    }
}
