//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly through SeaORM and bypass the application's repositories, so they
//! never touch a blob store.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let category = factory::category::create_category(&db).await?;
//! let server = factory::server::ServerFactory::new(&db, user.id, category.id)
//!     .icon("server/1/server_icon/a.png")
//!     .build()
//!     .await?;
//! factory::server_member::add_member(&db, server.id, user.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `server` - Create server entities
//! - `server_member` - Add users to a server's member set
//! - `channel` - Create channel entities
//! - `helpers` - ID generation and entities with their dependencies

pub mod category;
pub mod channel;
pub mod helpers;
pub mod server;
pub mod server_member;
pub mod user;

pub use category::create_category;
pub use channel::create_channel;
pub use server::create_server;
pub use server_member::add_member;
pub use user::create_user;
