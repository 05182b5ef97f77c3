//! Core types and traits for the event quote API.
//!
//! Request/response DTOs match the JSON shapes served on `/generate-quote` and `/get-quotes`.

mod config;
mod dto;
mod traits;

pub use config::*;
pub use dto::*;
pub use traits::*;
