//! Request-scoped helpers layered over the session middleware.

pub mod session;
