//! Rate limiting implementations.

mod allow_all;
#[cfg(feature = "rate-limit")]
mod memory;

pub use allow_all::AllowAllRateLimiter;

#[cfg(feature = "rate-limit")]
pub use memory::InMemoryRateLimiter;

use std::str::FromStr;
use std::time::Duration;

/// Requests allowed per key within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl RateLimitConfig {
    pub const fn per_minute(max_requests: u32) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(60),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::per_minute(100)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid rate limit {0:?}, expected <max>/<window_secs> or <max>/m")]
pub struct ParseRateLimitError(String);

/// `"5/60"`, `"5/m"` or `"10/s"`.
impl FromStr for RateLimitConfig {
    type Err = ParseRateLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRateLimitError(s.to_string());

        let (max, window) = s.trim().split_once('/').ok_or_else(err)?;
        let max_requests: u32 = max.trim().parse().map_err(|_| err())?;
        let secs: u64 = match window.trim() {
            "s" => 1,
            "m" => 60,
            "h" => 3600,
            n => n.parse().map_err(|_| err())?,
        };

        if max_requests == 0 || secs == 0 {
            return Err(err());
        }

        Ok(Self {
            max_requests,
            window: Duration::from_secs(secs),
        })
    }
}
