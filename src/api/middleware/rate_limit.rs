//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::config::Config;

/// Token bucket settings for the API router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// One request is replenished every `replenish_ms` milliseconds.
    pub replenish_ms: u64,
    pub burst: u32,
    /// Key clients by forwarding headers instead of the socket peer address.
    pub behind_proxy: bool,
}

impl RateLimit {
    /// Returns the configured limits, or `None` when rate limiting is disabled.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.rate_limit_enabled.then_some(Self {
            replenish_ms: config.rate_limit_replenish_ms,
            burst: config.rate_limit_burst,
            behind_proxy: config.behind_proxy,
        })
    }
}

/// Creates a per-IP rate limiter keyed by the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
/// Requires the router to be served with connect info
/// (`into_make_service_with_connect_info::<SocketAddr>`).
///
/// # Errors
///
/// Returns an error if `replenish_ms` or `burst` is zero.
pub fn layer(
    limits: &RateLimit,
) -> anyhow::Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
{
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(limits.replenish_ms)
        .burst_size(limits.burst)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("rate limit period and burst must be non-zero"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Creates a per-IP rate limiter for deployments behind a reverse proxy.
///
/// The client IP is read from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`,
/// falling back to the peer address.
///
/// # Errors
///
/// Returns an error if `replenish_ms` or `burst` is zero.
pub fn proxy_layer(
    limits: &RateLimit,
) -> anyhow::Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
{
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(limits.replenish_ms)
        .burst_size(limits.burst)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("rate limit period and burst must be non-zero"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
