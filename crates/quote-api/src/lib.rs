//! HTTP boundary for the event quote service.

pub mod config;
pub mod error;
pub mod server;
