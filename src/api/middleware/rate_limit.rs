//! Per-IP rate limiting for console routes.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Rate limiter layer keyed by the peer socket address.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Token bucket settings of one limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Seconds to replenish one request.
    pub per_second: u64,
    pub burst_size: u32,
}

/// Login redirect, callback and logout.
///
/// The callback is the only route that reaches the GraphQL backend, one
/// call per request, so a client cannot fan out further than this.
pub const PUBLIC: RateLimit = RateLimit {
    per_second: 2,
    burst_size: 30,
};

/// Guarded pages.
pub const PROTECTED: RateLimit = RateLimit {
    per_second: 1,
    burst_size: 60,
};

/// Creates a rate limiter for the public console routes.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
/// Requires the server to expose peer addresses
/// (`into_make_service_with_connect_info::<SocketAddr>`).
///
/// # Errors
///
/// Returns an error if the limits in [`PUBLIC`] are rejected by the builder.
pub fn layer() -> Result<RateLimitLayer> {
    build(PUBLIC)
}

/// Creates the limiter for routes behind the route guard.
///
/// # Errors
///
/// Returns an error if the limits in [`PROTECTED`] are rejected by the builder.
pub fn secure_layer() -> Result<RateLimitLayer> {
    build(PROTECTED)
}

fn build(limit: RateLimit) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(limit.per_second)
        .burst_size(limit.burst_size)
        .finish()
        .with_context(|| format!("Invalid rate limit: {limit:?}"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
