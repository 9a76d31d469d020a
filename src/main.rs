use anyhow::Result;
use gdp_loader::{load_and_prepare_gdp_data, load_config};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) config ───────────────────────────────────────────────────
    match load_config()? {
        Some(config) => info!(keys = config.len(), "config loaded"),
        None => warn!("continuing without config"),
    }

    // ─── 3) GDP table ────────────────────────────────────────────────
    let Some(table) = load_and_prepare_gdp_data()? else {
        warn!("no GDP data; exit");
        return Ok(());
    };

    let years = table.years();
    info!(
        records = table.len(),
        countries = table.countries().len(),
        regions = table.regions().len(),
        first_year = ?years.first(),
        last_year = ?years.last(),
        "GDP data ready"
    );

    info!("all done");
    Ok(())
}
