use url_fanout::{FetchConfig, FetchCoordinator};

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries only the report.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Fetch failures are part of the report, and nothing else changes the exit status either.
    if let Err(e) = run().await {
        log::error!("{e:#}");
    }
}

async fn run() -> anyhow::Result<()> {
    let coordinator = FetchCoordinator::new(FetchConfig::default())?;
    log::debug!("fetching {} URLs", coordinator.urls().len());

    let mut stdout = std::io::stdout().lock();
    let report = coordinator.run(&mut stdout).await;
    if report.failed_writes > 0 {
        log::warn!("{} report lines could not be written", report.failed_writes);
    }

    Ok(())
}
