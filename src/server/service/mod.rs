//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They work with domain models rather than DTOs or entity models and are responsible for:
//!
//! - **Validation**: Parsing raw request parameters and rejecting malformed ones
//! - **Authorization**: Enforcing which operations require a signed-in caller
//! - **Orchestration**: Coordinating repository calls into one operation

pub mod server;
