use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::channel::{Channel, CreateChannelParams, UpdateChannelParams};

/// Repository providing database operations for server channels.
///
/// Channel names are lowercased on every write, so stored names are always lowercase
/// regardless of how the caller spelled them.
pub struct ChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a channel with a lowercased name.
    ///
    /// # Returns
    /// - `Ok(Channel)` - The created channel with generated ID
    /// - `Err(DbErr)` - Database error, including unknown owner or server
    pub async fn create(&self, params: CreateChannelParams) -> Result<Channel, DbErr> {
        let entity = entity::channel::ActiveModel {
            name: ActiveValue::Set(params.name.to_lowercase()),
            owner_id: ActiveValue::Set(params.owner_id),
            topic: ActiveValue::Set(params.topic),
            server_id: ActiveValue::Set(params.server_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Channel::from_entity(entity))
    }

    pub async fn get_by_server_id(&self, server_id: i32) -> Result<Vec<Channel>, DbErr> {
        let channels = entity::prelude::Channel::find()
            .filter(entity::channel::Column::ServerId.eq(server_id))
            .order_by_asc(entity::channel::Column::Id)
            .all(self.db)
            .await?;

        Ok(channels.into_iter().map(Channel::from_entity).collect())
    }

    /// Updates a channel's name and topic, lowercasing the name.
    ///
    /// # Returns
    /// - `Ok(Channel)` - The updated channel
    /// - `Err(DbErr::RecordNotFound)` - No channel exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, params: UpdateChannelParams) -> Result<Channel, DbErr> {
        let channel = entity::prelude::Channel::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Channel with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::channel::ActiveModel = channel.into();
        active_model.name = ActiveValue::Set(params.name.to_lowercase());
        active_model.topic = ActiveValue::Set(params.topic);

        let entity = active_model.update(self.db).await?;

        Ok(Channel::from_entity(entity))
    }

    /// Deletes a channel. Channels hold no files, so there is nothing else to clean up.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Channel::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
