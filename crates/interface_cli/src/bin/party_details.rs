//! Party Details - Command-Line Binary
//!
//! Resolves one party profile against a JSON dataset and prints it to
//! stdout as pretty JSON. Notices (such as account creation) and logs go to
//! stderr.
//!
//! # Usage
//!
//! ```bash
//! PARTY_DATASET_PATH=demos/dataset.json PARTY_PARTY=Acme PARTY_COMPANY=C \
//!     PARTY_POSTING_DATE=2024-01-15 cargo run --bin party-details
//! ```
//!
//! # Environment Variables
//!
//! * `PARTY_DATASET_PATH` - JSON dataset to load (required)
//! * `PARTY_LOCALE` - Locale for notices and errors (default: en-US)
//! * `PARTY_LOG_LEVEL` - Log filter: trace, debug, info, warn, error (default: warn)
//! * `PARTY_LOG_FORMAT` - pretty or json (default: pretty)
//! * `PARTY_ACTOR` - User the request is made as (default: Administrator)
//! * `PARTY_PARTY`, `PARTY_ACCOUNT`, `PARTY_PARTY_TYPE`, `PARTY_COMPANY`,
//!   `PARTY_POSTING_DATE`, `PARTY_PRICE_LIST`, `PARTY_CURRENCY`,
//!   `PARTY_IGNORE_PERMISSIONS` - the request

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::Messages;
use domain_party::ResolutionContext;
use interface_cli::{CliConfig, Dataset, LogFormat, StderrNotifier};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::load().context("loading configuration")?;
    init_tracing(&config.log_level, config.log_format);

    let dataset_path = config.dataset_path()?;
    let dataset = Dataset::load(dataset_path)
        .with_context(|| format!("loading dataset {}", dataset_path.display()))?;

    let messages = Messages::for_locale(&config.locale);
    let context = ResolutionContext::new(config.actor.as_str()).with_restrictions(dataset.restrictions.clone());
    let service = dataset.into_service(Arc::new(StderrNotifier), messages.clone());
    let request = config.request();

    tracing::info!(
        correlation_id = %context.metadata.correlation_id,
        party_type = %request.party_type,
        "resolving party details"
    );

    match service.get_party_details(&request, &context) {
        Ok(profile) => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", error.localized(&messages));
            Err(error.into())
        }
    }
}

/// Initializes the tracing subscriber, writing to stderr
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let json = format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr)))
        .init();
}
