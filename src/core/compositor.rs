use crate::domain::model::DEFAULT_LOGO_SCALE;
use crate::utils::error::{QrError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

/// Returns a copy of `background` with `foreground` alpha-blended onto its center.
///
/// The foreground's own alpha channel is the mask. A foreground larger than the
/// background on either axis is rejected.
pub fn paste_centered(background: &RgbaImage, foreground: &RgbaImage) -> Result<RgbaImage> {
    let (bg_width, bg_height) = background.dimensions();
    let (fg_width, fg_height) = foreground.dimensions();

    if fg_width > bg_width || fg_height > bg_height {
        return Err(QrError::InvalidDimensions {
            message: format!(
                "foreground {}x{} does not fit background {}x{}",
                fg_width, fg_height, bg_width, bg_height
            ),
        });
    }

    let offset_x = (bg_width - fg_width) / 2;
    let offset_y = (bg_height - fg_height) / 2;

    let mut out = background.clone();
    imageops::overlay(&mut out, foreground, offset_x as i64, offset_y as i64);
    Ok(out)
}

/// Composites `logo`, scaled to `scale` of the base side length, onto the
/// center of `base`. Both inputs must be square; neither is modified.
pub fn place_logo(base: &DynamicImage, logo: &DynamicImage, scale: f64) -> Result<RgbaImage> {
    ensure_square("base image", base)?;
    ensure_square("logo", logo)?;
    if !(scale > 0.0 && scale <= 1.0) {
        return Err(QrError::InvalidDimensions {
            message: format!("logo scale {} is outside (0, 1]", scale),
        });
    }

    let mut qr_code = base.to_rgba8();
    let (width, height) = qr_code.dimensions();
    tracing::debug!("QR code size ({}, {})", width, height);

    let logo_width = (width as f64 * scale) as u32;
    let logo_height = (height as f64 * scale) as u32;
    if logo_width == 0 || logo_height == 0 {
        return Err(QrError::InvalidDimensions {
            message: format!("logo scale {} shrinks the logo to nothing", scale),
        });
    }

    let logo = imageops::resize(
        &logo.to_rgba8(),
        logo_width,
        logo_height,
        FilterType::CatmullRom,
    );
    tracing::debug!("Logo size ({}, {})", logo_width, logo_height);

    let transparent = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    let centered = paste_centered(&transparent, &logo)?;
    imageops::overlay(&mut qr_code, &centered, 0, 0);

    Ok(qr_code)
}

/// [`place_logo`] with the default scale of 0.4.
pub fn place_logo_default(base: &DynamicImage, logo: &DynamicImage) -> Result<RgbaImage> {
    place_logo(base, logo, DEFAULT_LOGO_SCALE)
}

fn ensure_square(name: &str, img: &DynamicImage) -> Result<()> {
    let (w, h) = (img.width(), img.height());
    if w != h {
        return Err(QrError::InvalidDimensions {
            message: format!("{} must be square, got {}x{}", name, w, h),
        });
    }
    Ok(())
}
