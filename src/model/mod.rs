//! Transport DTOs shared by every API endpoint.

pub mod api;
pub mod server;
