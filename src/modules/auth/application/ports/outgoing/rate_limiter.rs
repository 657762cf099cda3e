// application/ports/outgoing/rate_limiter.rs

/// Fixed-window throttle keyed by caller identity.
///
/// A single-instance in-memory window is sufficient here; the guarantee
/// is "no more than the quota per window per key", not distributed
/// accuracy.
pub trait RateLimiter: Send + Sync {
    /// Records one attempt for `key` and reports whether it fits inside
    /// the current window's quota.
    fn allow(&self, key: &str) -> bool;
}
