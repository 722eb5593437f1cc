//! # Pixgram API Server
//!
//! Actix-web application: routes, session authentication, representation of
//! resources and the background session sweep.

#[cfg(feature = "scheduler")]
pub mod background;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod representation;
pub mod state;
pub mod telemetry;

use actix_web::web;

pub use config::AppConfig;
pub use state::{AppState, Settings};

/// Register state and routes on an `App`. Shared by `main` and the tests.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state));
        handlers::configure_routes(cfg);
    }
}
