use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "brand_qr=info";
const VERBOSE_FILTER: &str = "brand_qr=debug,info";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Compact, untimed log lines on stderr; stdout carries only the saved path.
pub fn init_cli_logger(verbose: bool) {
    let filter = env_filter(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json(), // CloudWatch parses JSON lines and stamps them itself
        )
        .init();
}
