use brand_qr::utils::{logger, validation::Validate};
use brand_qr::{BrandQrPipeline, CliConfig, LocalStorage, QrEngine};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting brand-qr CLI");

    // 載入設定檔並驗證配置
    if let Err(e) = config.load_file().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let storage = LocalStorage::new(config.work_dir.clone());
    let url = config.url.clone();
    let work_dir = config.work_dir.clone();
    let pipeline = BrandQrPipeline::new(storage, config);
    let engine = QrEngine::new(pipeline);

    match engine.run(&url).await {
        Ok(output_path) => {
            let full_path = std::path::Path::new(&work_dir).join(&output_path);
            tracing::info!("✅ QR code created");
            println!("✅ QR code saved to: {}", full_path.display());
        }
        Err(e) => {
            tracing::error!(
                "❌ No QR code image was created: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(1);
        }
    }

    Ok(())
}
