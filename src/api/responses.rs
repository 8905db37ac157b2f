//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::CountdownSnapshot;

/// API response structure for countdown control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub countdown: CountdownSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, countdown: CountdownSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            countdown,
        }
    }

    /// Response for a countdown that has just been armed
    pub fn counting(message: String, countdown: CountdownSnapshot) -> Self {
        Self::new("counting".to_string(), message, countdown)
    }

    /// Response for a countdown that has been stopped
    pub fn stopped(message: String, countdown: CountdownSnapshot) -> Self {
        Self::new("stopped".to_string(), message, countdown)
    }

    /// Response when no ticker was running to act on
    pub fn idle(message: String, countdown: CountdownSnapshot) -> Self {
        Self::new("idle".to_string(), message, countdown)
    }
}

/// Enhanced status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub countdown: CountdownSnapshot,
    pub ticker_running: bool,
    pub frame: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Bare display frame for clients that only want the clock string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayResponse {
    pub display: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
