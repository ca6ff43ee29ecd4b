//! Holiday Relay Application Layer
//!
//! Ports (traits the infrastructure adapts to) and use cases orchestrating
//! the cache-or-fetch flow behind the two HTTP endpoints.
pub mod ports;
pub mod services;
pub mod use_cases;
