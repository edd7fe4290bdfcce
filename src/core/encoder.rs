use crate::domain::model::EncodeSettings;
use crate::utils::error::{QrError, Result};
use crate::utils::validation::Validate;
use image::{GrayImage, Luma};
use qrcode::types::QrError as LibQrError;
use qrcode::{Color, QrCode, Version};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Encodes `url` at the fixed version and error-correction level in `settings`.
///
/// Data that does not fit the version fails with [`QrError::UrlTooLong`]; a
/// larger version is never tried. Modules are black on a white background with
/// `settings.border` light modules around the symbol.
pub fn create_qr(url: &str, settings: &EncodeSettings) -> Result<GrayImage> {
    settings.validate()?;

    let code = QrCode::with_version(
        url.as_bytes(),
        Version::Normal(settings.version),
        settings.error_correction.into(),
    )
    .map_err(|e| match e {
        LibQrError::DataTooLong => {
            tracing::error!("URL is too long.");
            QrError::UrlTooLong {
                version: settings.version,
            }
        }
        other => QrError::Encoding(other.to_string()),
    })?;

    let width = code.width() as u32;
    let colors = code.to_colors();
    let module = settings.module_size;
    let border = settings.border;
    // width is 17 + 4 * version, so this matches the validated side
    let side = settings.image_side()?;
    tracing::debug!("QR code: {} modules, {}x{} px", width, side, side);

    let img = GrayImage::from_fn(side, side, |x, y| {
        let (mx, my) = (x / module, y / module);
        if mx < border || my < border {
            return LIGHT;
        }
        let (qx, qy) = (mx - border, my - border);
        if qx >= width || qy >= width {
            return LIGHT;
        }
        match colors[(qy * width + qx) as usize] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    });

    Ok(img)
}
