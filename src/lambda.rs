#[cfg(feature = "lambda")]
use brand_qr::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use brand_qr::{handle_request, ApiRequest, BrandQrPipeline, HandlerResponse};
#[cfg(feature = "lambda")]
use brand_qr::{LambdaConfig, LocalStorage, QrEngine};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<ApiRequest>) -> Result<HandlerResponse, Error> {
    tracing::info!("Starting QR Lambda function");

    // 每次調用重新讀取配置
    let config = LambdaConfig::from_env()
        .and_then(|c| c.validate().map(|_| c))
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let storage = LocalStorage::new(config.work_dir.clone());
    let engine = QrEngine::new(BrandQrPipeline::new(storage, config));

    let response = handle_request(&event.payload, &engine).await.map_err(|e| {
        tracing::error!("❌ QR Lambda function failed: {} ({:?})", e, e.category());
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    tracing::info!(
        "QR Lambda function completed with status {}",
        response.status_code
    );
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
