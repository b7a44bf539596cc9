//! API middleware stack. Only one layer for this service: the
//! per-client rate limiter, applied to every route.

pub mod rate;
