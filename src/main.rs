use crate::config::Config;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod domain;
mod errors;
mod handlers;
mod notify;
mod request;
mod responses;
mod router;
mod seed;
mod state;
mod templates;
mod uploads;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!(%e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let addr = config.addr;
    let max_workers = config.max_workers;
    let state = AppState::new(config);
    info!(%addr, max_workers, "Starting ReWear server");

    let server = Server::bind(&addr).max_workers(max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(%err, "Request failed");
            responses::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!(%e, "Server ended with error");
    }

    info!("Server shut down cleanly");
}
