//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// The owner and category must already exist. Banner and icon are stored as raw
/// paths without writing a blob, which lets tests seed a blob store separately.
///
/// # Example
///
/// ```rust,ignore
/// let server = ServerFactory::new(&db, owner.id, category.id)
///     .name("Rustaceans")
///     .banner("server/1/server_banner/b.jpg")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    category_id: i32,
    name: String,
    description: Option<String>,
    banner: Option<String>,
    icon: Option<String>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with a unique `Server {n}` name.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the owning user
    /// - `category_id` - ID of the category the server belongs to
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, category_id: i32) -> Self {
        Self {
            db,
            owner_id,
            category_id,
            name: format!("Server {}", next_id()),
            description: None,
            banner: None,
            icon: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn banner(mut self, path: impl Into<String>) -> Self {
        self.banner = Some(path.into());
        self
    }

    pub fn icon(mut self, path: impl Into<String>) -> Self {
        self.icon = Some(path.into());
        self
    }

    /// Builds and inserts the server entity into the database.
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            category_id: ActiveValue::Set(self.category_id),
            description: ActiveValue::Set(self.description),
            banner: ActiveValue::Set(self.banner),
            icon: ActiveValue::Set(self.icon),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values for the given owner and category.
pub async fn create_server(
    db: &DatabaseConnection,
    owner_id: i32,
    category_id: i32,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, owner_id, category_id).build().await
}
