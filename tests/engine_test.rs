use anyhow::Result;
use brand_qr::config::toml_config::QrConfig;
use brand_qr::core::compositor::{paste_centered, place_logo};
use brand_qr::core::encoder::create_qr;
use brand_qr::domain::ports::ConfigProvider;
use brand_qr::{BrandQrPipeline, EncodeSettings, LambdaConfig, LocalStorage, QrEngine, QrError};
use image::{DynamicImage, Rgba, RgbaImage};
use tempfile::TempDir;

#[test]
fn test_qr_with_logo_keeps_corners() -> Result<()> {
    let settings = EncodeSettings::default();
    let code = create_qr("https://example.com/menu", &settings)?;
    let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 300, Rgba([0, 128, 0, 255])));

    let branded = place_logo(&DynamicImage::ImageLuma8(code.clone()), &logo, settings.logo_scale)?;

    assert_eq!(branded.dimensions(), code.dimensions());
    // finder patterns sit outside the logo area
    for (x, y) in [(45, 45), (404, 45), (45, 404)] {
        let expected = code.get_pixel(x, y).0[0];
        assert_eq!(*branded.get_pixel(x, y), Rgba([expected, expected, expected, 255]));
    }
    assert_eq!(*branded.get_pixel(225, 225), Rgba([0, 128, 0, 255]));
    Ok(())
}

#[test]
fn test_logo_larger_than_code_is_rejected_by_paste() {
    let bg = RgbaImage::from_pixel(50, 50, Rgba([255, 255, 255, 255]));
    let fg = RgbaImage::from_pixel(60, 60, Rgba([0, 0, 0, 255]));
    assert!(matches!(
        paste_centered(&bg, &fg),
        Err(QrError::InvalidDimensions { .. })
    ));
}

#[tokio::test]
async fn test_custom_settings_from_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 255])).save(temp_dir.path().join("logo.png"))?;

    let file = QrConfig::from_toml_str(
        r#"
[encoding]
version = 2
module_size = 4
border = 2
logo_scale = 0.25
"#,
    )?;
    let config = LambdaConfig {
        settings: file.settings(),
        ..LambdaConfig::default()
    };
    assert_eq!(config.settings().image_side()?, (25 + 4) * 4);

    let engine = QrEngine::new(BrandQrPipeline::new(LocalStorage::new(temp_dir.path()), config));
    let path = engine.run("HELLO").await?;

    let img = image::open(temp_dir.path().join(path))?;
    assert_eq!((img.width(), img.height()), (116, 116));
    Ok(())
}

#[tokio::test]
async fn test_corrupt_logo_is_image_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("logo.png"), b"not a png").await?;

    let engine = QrEngine::new(BrandQrPipeline::new(
        LocalStorage::new(temp_dir.path()),
        LambdaConfig::default(),
    ));
    let result = engine.run("https://example.com").await;

    assert!(matches!(result, Err(QrError::Image(_))));
    assert!(!temp_dir.path().join("qr.png").exists());
    Ok(())
}
