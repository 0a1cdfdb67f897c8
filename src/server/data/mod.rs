//! Database repository layer for the server-chat domain.
//!
//! Repositories handle CRUD for categories, servers and channels. They use SeaORM entity
//! models internally and return domain models from `server::model`. Repositories of
//! file-bearing records also hold the blob store and own the stored files' lifecycle:
//! replaced files are deleted on update and every referenced file is deleted before the
//! record itself.

pub mod category;
pub mod channel;
pub mod server;
pub mod upload;
