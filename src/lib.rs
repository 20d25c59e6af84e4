//! Solar system facts over HTTP.
//!
//! `POST /planet` looks a planet up by id in the record store; `/os`,
//! `/live` and `/ready` report on the serving process. The `seed` binary
//! resets the store to the reference dataset.

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub mod database;
pub mod error;
pub mod handlers;
pub mod lookup;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod settings;

use lookup::LookupService;

/// Shared handler state. Cloned per request, so it only holds cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub lookup: LookupService,
    pub app_env: Arc<str>,
}

impl AppState {
    pub fn new(lookup: LookupService, app_env: &str) -> Self {
        Self {
            lookup,
            app_env: Arc::from(app_env),
        }
    }
}

/// Log to stdout, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
