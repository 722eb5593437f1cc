//! # Pixgram API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

use api_server::observability::RequestIdMiddleware;
use api_server::telemetry::{TelemetryConfig, init_telemetry};
use api_server::{AppConfig, AppState, Settings, configure_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::io::Error::other(e)
    })?;

    tracing::info!(
        "Starting Pixgram API Server on {}:{}",
        config.host,
        config.port
    );

    let db = pixgram_infra::connect(&config.database)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            std::io::Error::other(e)
        })?;

    let state = AppState::new(db, Settings::from(&config));

    #[cfg(feature = "scheduler")]
    let mut scheduler = start_scheduler(&config, &state).await;

    let server_state = state.clone();
    let result = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .configure(configure_app(server_state.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    #[cfg(feature = "scheduler")]
    {
        if let Some(scheduler) = scheduler.as_mut()
            && let Err(e) = scheduler.shutdown().await
        {
            tracing::warn!(error = %e, "Scheduler shutdown failed");
        }
    }

    result
}

/// Start the session sweep. A scheduler failure is logged and the server
/// runs without it.
#[cfg(feature = "scheduler")]
async fn start_scheduler(
    config: &AppConfig,
    state: &AppState,
) -> Option<api_server::background::Scheduler> {
    use api_server::background::{Scheduler, SchedulerConfig, schedule_session_sweep};

    let scheduler_config = SchedulerConfig::from(config);
    if !scheduler_config.enabled {
        tracing::info!("Scheduler disabled");
        return None;
    }

    let setup = async {
        let scheduler = Scheduler::new(scheduler_config).await?;
        schedule_session_sweep(&scheduler, state.sessions.clone()).await?;
        scheduler.start().await?;
        Ok::<_, tokio_cron_scheduler::JobSchedulerError>(scheduler)
    };

    match setup.await {
        Ok(scheduler) => Some(scheduler),
        Err(e) => {
            tracing::error!(error = %e, "Failed to start scheduler");
            None
        }
    }
}
