//! Services
//!
//! Notification channels and the HTTP client factory they share.

pub mod notification;
pub mod proxy;
