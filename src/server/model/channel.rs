//! Channel domain models and parameters.

use crate::model::server::ChannelDto;

/// Text channel inside a server.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: i32,
    /// Lowercase channel name.
    pub name: String,
    pub owner_id: i32,
    pub topic: String,
    pub server_id: i32,
}

impl Channel {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::channel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            topic: entity.topic,
            server_id: entity.server_id,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            name: self.name,
            topic: self.topic,
            owner: self.owner_id,
            server: self.server_id,
        }
    }
}

/// Parameters for creating a channel. The name is lowercased before insert.
#[derive(Debug, Clone)]
pub struct CreateChannelParams {
    pub name: String,
    pub owner_id: i32,
    pub topic: String,
    pub server_id: i32,
}

/// Parameters for updating a channel's name and topic.
#[derive(Debug, Clone)]
pub struct UpdateChannelParams {
    pub id: i32,
    pub name: String,
    pub topic: String,
}
