// Configuration layer - env-driven settings and logging setup

pub mod logging;

use std::env;

/// Application settings, loaded from environment variables with defaults
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Identity credited as borrower on approved requests
    pub current_user: String,

    /// Probability in [0, 1] that a valid mutation reports a simulated failure
    pub failure_rate: f64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let current_user =
            env::var("CURRENT_USER_NAME").unwrap_or_else(|_| "Current User".to_string());

        let failure_rate = env::var("SIMULATED_FAILURE_RATE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.2);

        Self {
            bind_addr,
            current_user,
            failure_rate,
        }
    }
}
