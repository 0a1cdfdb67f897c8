//! HTTP request handlers.
//!
//! Controllers extract request data, resolve the caller from the session, convert raw
//! query parameters into service parameters and convert domain models back into DTOs.

pub mod server;

#[cfg(test)]
mod test;
