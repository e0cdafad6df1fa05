use anyhow::{Context, Result};
use request_intl::config::Config;
use request_intl::i18n::{audit_required_keys, Bundle};
use std::sync::Arc;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("request_intl=info".parse()?),
        )
        .init();

    info!("Starting required-key audit");

    let config = Config::from_env()?;

    let bundle = match &config.locales_dir {
        Some(dir) => {
            info!("Loading catalogs from {}", dir.display());
            Bundle::load_dir(dir)
                .with_context(|| format!("Failed to load catalogs from {}", dir.display()))?
        }
        None => {
            info!("Using embedded catalogs");
            Bundle::embedded().context("Failed to load embedded catalogs")?
        }
    };
    let bundle = Arc::new(bundle);

    let locales = config.audit_locales();
    info!(
        "Auditing {} keys across {} locales (default: {})",
        config.required_keys.len(),
        locales.len(),
        config.default_locale
    );

    let report = audit_required_keys(Some(&bundle), &config.required_keys, &locales)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.is_clean() {
        warn!("{} required keys are missing", report.missing.len());
    }
    report.into_result()?;

    info!("All required keys resolve");
    Ok(())
}
