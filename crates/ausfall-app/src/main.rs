use ausfall_app::pipeline::{run, today_in};
use ausfall_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let today = today_in(config.reference_timezone()?);
    tracing::info!(%today, document = %config.paths.document.display(), "Generating cancelled dates");

    let report = run(&config, today)?;

    tracing::info!(
        upcoming = report.entries.len(),
        outcome = ?report.outcome,
        "Done"
    );

    Ok(())
}
