use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use tracing::{info, warn};

use crate::errors::ServerError;

pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// Points granted to a user on their first sign-in.
    pub starting_points: u32,
    /// Signing in with this email grants admin access.
    pub admin_email: String,
    /// Upper bound on photos attached to one submission.
    pub max_images: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            starting_points: 150,
            admin_email: "admin@rewear.app".to_string(),
            max_images: 5,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ServerError> {
        let defaults = Self::default();

        Ok(Self {
            addr: try_load("REWEAR_ADDR", defaults.addr)?,
            max_workers: try_load("REWEAR_MAX_WORKERS", defaults.max_workers)?,
            starting_points: try_load("REWEAR_STARTING_POINTS", defaults.starting_points)?,
            admin_email: try_load("REWEAR_ADMIN_EMAIL", defaults.admin_email)?
                .trim()
                .to_lowercase(),
            max_images: try_load("REWEAR_MAX_IMAGES", defaults.max_images)?,
        })
    }
}

fn try_load<T>(key: &str, default: T) -> Result<T, ServerError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            warn!("Invalid {key} value: {e}");
            ServerError::Config(format!("{key}={raw}: {e}"))
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
