use async_trait::async_trait;

use leumas_core::ports::{RateLimitError, RateLimitResult, RateLimiter};

/// Never limits. Used when rate limiting is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAllRateLimiter;

#[async_trait]
impl RateLimiter for AllowAllRateLimiter {
    async fn check(&self, _key: &str) -> Result<RateLimitResult, RateLimitError> {
        Ok(RateLimitResult::allowed(u32::MAX))
    }
}
