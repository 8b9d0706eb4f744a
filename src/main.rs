use chrono::{Datelike, Utc};
use tracing_subscriber::EnvFilter;

use nyumba_engine::config::EngineConfig;
use nyumba_engine::services::{dashboard, reports, sample_data};
use nyumba_engine::store::Store;

/// Prints a JSON snapshot of the book: dashboard KPIs, the recent
/// activity feed, and the current year's report pack.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = EngineConfig::from_env();
    let store = Store::open(&config.data_dir)?;

    if config.sample_data_enabled_runtime() {
        sample_data::initialize_sample_data(&store);
    }

    tracing::info!(
        app_name = %config.app_name,
        environment = %config.environment,
        data_dir = %config.data_dir.display(),
        "Rental book opened"
    );

    let snapshot = serde_json::json!({
        "dashboard": dashboard::compute(&store),
        "recentActivity": dashboard::recent(&store),
        "report": reports::generate(&store, Utc::now().year()),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
