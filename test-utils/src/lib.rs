//! talk2me Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the talk2me
//! server backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, categories, servers, members and channels
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_servers() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_server_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     let (owner, category, server) = factory::helpers::create_server_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
