use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use voyage_server::config::ServerConfig;
use voyage_server::context::{ScheduleSource, SharedSchedule};
use voyage_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("voyage_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    // Load keyword aliases. Searches report "not initialized" until this succeeds.
    let source = ScheduleSource::new(&config.keywords_path).with_zone(config.zone.clone());
    let schedule = SharedSchedule::uninitialized(source);
    if schedule.refresh().await.is_err() {
        warn!("serving without a keyword table until a reload succeeds");
    }

    // Spawn background task to reload the keyword file
    if let Some(interval) = config.reload_interval() {
        let schedule_reload = schedule.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(interval);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match schedule_reload.refresh().await {
                    Ok(count) => info!(aliases = count, "reloaded keyword table"),
                    Err(e) => warn!(error = %e, "reload failed, keeping previous keyword table"),
                }
            }
        });
    }

    let state = AppState::new(schedule, config.max_window());
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    info!("Voyage schedule listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health          - Health check");
    info!("  GET  /api/keywords    - Keyword aliases");
    info!("  GET  /api/voyages     - Search voyages (keys, start, end)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
