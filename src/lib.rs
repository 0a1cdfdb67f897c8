//! talk2me server backend.
//!
//! Categories, servers and channels of a community chat platform, the server listing
//! API and the lifecycle of uploaded icons and banners. The binary in `main.rs` wires
//! these into an Axum application.

pub mod model;
pub mod server;
