use crate::utils::error::{QrError, Result};
use image::{GrayImage, RgbaImage};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VERSION: i16 = 5;
pub const DEFAULT_MODULE_SIZE: u32 = 10;
pub const DEFAULT_BORDER: u32 = 4;
pub const DEFAULT_LOGO_SCALE: f64 = 0.4;

pub const MAX_MODULE_SIZE: u32 = 100;
pub const MAX_BORDER: u32 = 100;
/// Largest bitmap side accepted, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 8192;

/// QR error-correction level, lowest to highest redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

/// Parameters of the encoded bitmap. The version is fixed, never grown to fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodeSettings {
    pub version: i16,
    pub error_correction: ErrorCorrection,
    pub module_size: u32,
    pub border: u32,
    pub logo_scale: f64,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            error_correction: ErrorCorrection::H,
            module_size: DEFAULT_MODULE_SIZE,
            border: DEFAULT_BORDER,
            logo_scale: DEFAULT_LOGO_SCALE,
        }
    }
}

impl EncodeSettings {
    /// Side length in pixels of the bitmap these settings produce.
    pub fn image_side(&self) -> Result<u32> {
        let modules = 17 + 4 * self.version.clamp(1, 40) as u32;
        let side = self
            .border
            .checked_mul(2)
            .and_then(|b| b.checked_add(modules))
            .and_then(|m| m.checked_mul(self.module_size))
            .filter(|side| *side <= MAX_IMAGE_SIDE);

        side.ok_or_else(|| QrError::InvalidConfigValueError {
            field: "module_size".to_string(),
            value: format!("{} (border {})", self.module_size, self.border),
            reason: format!("Image side must not exceed {} px", MAX_IMAGE_SIDE),
        })
    }
}

/// Output of the compose stage: either the plain code or the logo composite.
#[derive(Debug, Clone)]
pub enum QrArtifact {
    Plain(GrayImage),
    Branded(RgbaImage),
}

impl QrArtifact {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            QrArtifact::Plain(img) => img.dimensions(),
            QrArtifact::Branded(img) => img.dimensions(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Status object returned by the request handler. `body` is a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn with_message(status_code: u16, message: &str) -> Result<Self> {
        let body = serde_json::to_string(&MessageBody {
            message: message.to_string(),
        })?;
        Ok(Self { status_code, body })
    }

    pub fn message(&self) -> Option<String> {
        serde_json::from_str::<MessageBody>(&self.body)
            .ok()
            .map(|b| b.message)
    }
}
