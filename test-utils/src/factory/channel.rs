//! Channel factory for creating test channel entities.
//!
//! Inserts rows directly, so the name is stored exactly as given. Use the
//! application's channel repository when a test needs name normalization.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channels with customizable fields.
pub struct ChannelFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    server_id: i32,
    name: String,
    topic: String,
}

impl<'a> ChannelFactory<'a> {
    /// Creates a new ChannelFactory with a unique `channel-{n}` name.
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, server_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            server_id,
            name: format!("channel-{}", id),
            topic: format!("Topic {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Builds and inserts the channel entity into the database.
    pub async fn build(self) -> Result<entity::channel::Model, DbErr> {
        entity::channel::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            topic: ActiveValue::Set(self.topic),
            server_id: ActiveValue::Set(self.server_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel with default values.
pub async fn create_channel(
    db: &DatabaseConnection,
    owner_id: i32,
    server_id: i32,
) -> Result<entity::channel::Model, DbErr> {
    ChannelFactory::new(db, owner_id, server_id).build().await
}
