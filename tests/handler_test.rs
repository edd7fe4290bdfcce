use anyhow::Result;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use brand_qr::app::handler::{MSG_CREATED, MSG_INVALID_QUERY, MSG_URL_TOO_LONG};
use brand_qr::{
    handle_request, ApiRequest, BrandQrPipeline, LambdaConfig, LocalStorage, QrEngine, QrError,
};
use image::{Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

type LocalEngine = QrEngine<BrandQrPipeline<LocalStorage, LambdaConfig>>;

fn setup() -> Result<(TempDir, LocalEngine)> {
    let temp_dir = TempDir::new()?;

    // 白底藍色方塊的測試 logo
    let mut logo = RgbaImage::from_pixel(90, 90, Rgba([255, 255, 255, 255]));
    for x in 20..70 {
        for y in 20..70 {
            logo.put_pixel(x, y, Rgba([20, 60, 200, 255]));
        }
    }
    logo.save(temp_dir.path().join("logo.png"))?;

    let config = LambdaConfig::default().with_work_dir(temp_dir.path().to_string_lossy());
    let storage = LocalStorage::new(config.work_dir.clone());
    let engine = QrEngine::new(BrandQrPipeline::new(storage, config));
    Ok((temp_dir, engine))
}

fn output_exists(dir: &Path) -> bool {
    dir.join("qr.png").exists()
}

#[tokio::test]
async fn test_missing_url_is_invalid_query() -> Result<()> {
    let (temp_dir, engine) = setup()?;

    let request = ApiRequest::with_query(Vec::<(String, String)>::new());
    let response = handle_request(&request, &engine).await?;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, r#"{"message":"Invalid query."}"#);
    assert_eq!(response.message().as_deref(), Some(MSG_INVALID_QUERY));
    assert!(!output_exists(temp_dir.path()));
    Ok(())
}

#[tokio::test]
async fn test_null_query_is_invalid_query() -> Result<()> {
    let (_temp_dir, engine) = setup()?;

    let request: ApiRequest =
        serde_json::from_value(serde_json::json!({ "queryStringParameters": null }))?;
    let response = handle_request(&request, &engine).await?;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.message().as_deref(), Some(MSG_INVALID_QUERY));
    Ok(())
}

#[tokio::test]
async fn test_long_url_is_rejected() -> Result<()> {
    let (temp_dir, engine) = setup()?;

    let long_url = format!("https://example.com/{}", "x".repeat(3000));
    let request = ApiRequest::with_query([("url", URL_SAFE_NO_PAD.encode(long_url))]);
    let response = handle_request(&request, &engine).await?;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, r#"{"message":"URL is too long."}"#);
    assert_eq!(response.message().as_deref(), Some(MSG_URL_TOO_LONG));
    assert!(!output_exists(temp_dir.path()));
    Ok(())
}

#[tokio::test]
async fn test_valid_url_creates_qr_code() -> Result<()> {
    let (temp_dir, engine) = setup()?;

    let request = ApiRequest::with_query([("url", "aHR0cDovL2V4YW1wbGUuY29t")]);
    let response = handle_request(&request, &engine).await?;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, r#"{"message":"Created a QR code."}"#);
    assert_eq!(response.message().as_deref(), Some(MSG_CREATED));

    // 只有檔案是輸出，回應不含圖片
    let img = image::open(temp_dir.path().join("qr.png"))?.to_rgba8();
    assert_eq!(img.dimensions(), (450, 450));
    // logo 縮放到 180x180 並置中，藍色方塊在正中央
    assert_eq!(*img.get_pixel(225, 225), Rgba([20, 60, 200, 255]));
    // quiet zone 保持白色
    assert_eq!(*img.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
    Ok(())
}

#[tokio::test]
async fn test_padded_url_parameter() -> Result<()> {
    let (temp_dir, engine) = setup()?;

    let request = ApiRequest::with_query([("url", "aHR0cDovL2V4YW1wbGUuY29t==")]);
    let response = handle_request(&request, &engine).await?;

    assert_eq!(response.status_code, 200);
    assert!(output_exists(temp_dir.path()));
    Ok(())
}

#[tokio::test]
async fn test_malformed_base64_propagates() -> Result<()> {
    let (temp_dir, engine) = setup()?;

    let request = ApiRequest::with_query([("url", "%%% not base64 %%%")]);
    let result = handle_request(&request, &engine).await;

    assert!(matches!(result, Err(QrError::Decode(_))));
    assert!(!output_exists(temp_dir.path()));
    Ok(())
}

#[tokio::test]
async fn test_same_request_overwrites_identical_file() -> Result<()> {
    let (temp_dir, engine) = setup()?;
    let request = ApiRequest::with_query([("url", "aHR0cDovL2V4YW1wbGUuY29t")]);

    handle_request(&request, &engine).await?;
    let first = std::fs::read(temp_dir.path().join("qr.png"))?;
    handle_request(&request, &engine).await?;
    let second = std::fs::read(temp_dir.path().join("qr.png"))?;

    assert_eq!(first, second);
    Ok(())
}
