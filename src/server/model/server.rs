//! Server domain models, listing parameters and serialization.
//!
//! Provides the `Server` domain model with its nested channels and optional member
//! count, parameter types for create/update operations, and the filter plan built
//! by the listing endpoint.

use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QuerySelect, QueryTrait};

use crate::{
    model::server::ServerDto,
    server::model::{
        channel::Channel,
        upload::{FileChange, FileUpload},
    },
};

/// Server with nested channels and, when requested, its member count.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub category_id: i32,
    pub description: Option<String>,
    /// Blob path of the banner, relative to the media root.
    pub banner: Option<String>,
    /// Blob path of the icon, relative to the media root.
    pub icon: Option<String>,
    /// Channels of the server in ascending id order.
    pub channels: Vec<Channel>,
    /// Member count annotation; only populated when the query asked for it.
    pub num_members: Option<u64>,
}

impl Server {
    /// Converts an entity model to a domain model without channels or annotation.
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            category_id: entity.category_id,
            description: entity.description,
            banner: entity.banner,
            icon: entity.icon,
            channels: Vec::new(),
            num_members: None,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// The member count is only emitted when `ctx.with_num_members` is set, and
    /// then only the annotated value is used. A server that was never annotated
    /// serializes without the field rather than failing.
    ///
    /// # Arguments
    /// - `ctx` - Request-derived serialization options
    ///
    /// # Returns
    /// - `ServerDto` - DTO with file paths rendered as media URLs
    pub fn into_dto(self, ctx: &ServerDtoContext) -> ServerDto {
        ServerDto {
            id: self.id,
            num_members: self.num_members.filter(|_| ctx.with_num_members),
            channel_server: self.channels.into_iter().map(Channel::into_dto).collect(),
            name: self.name,
            description: self.description,
            banner: self.banner.map(|path| ctx.media_url(&path)),
            icon: self.icon.map(|path| ctx.media_url(&path)),
            owner: self.owner_id,
            category: self.category_id,
        }
    }
}

/// Request-derived options for serializing servers.
#[derive(Debug, Clone)]
pub struct ServerDtoContext<'a> {
    /// Whether the caller asked for the `num_members` field.
    pub with_num_members: bool,
    /// Public URL prefix of the media root, ending in `/`.
    pub media_url: &'a str,
}

impl ServerDtoContext<'_> {
    fn media_url(&self, path: &str) -> String {
        format!("{}{}", self.media_url, path)
    }
}

/// Parameters for creating a server.
///
/// Files are written after insert because their paths embed the new server id.
#[derive(Debug, Clone)]
pub struct CreateServerParams {
    pub name: String,
    pub owner_id: i32,
    pub category_id: i32,
    pub description: Option<String>,
    pub banner: Option<FileUpload>,
    pub icon: Option<FileUpload>,
}

/// Parameters for updating a server.
///
/// Scalar fields are always overwritten; banner and icon follow `FileChange`.
#[derive(Debug, Clone)]
pub struct UpdateServerParams {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub banner: FileChange,
    pub icon: FileChange,
}

/// Raw listing parameters as received from the query string.
///
/// Empty strings are already mapped to `None`; numeric values are validated by
/// the service, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerListParams {
    pub category: Option<String>,
    pub category_name: Option<String>,
    pub by_user: bool,
    pub qty: Option<String>,
    pub server_id: Option<String>,
    pub with_num_members: bool,
}

/// One equality predicate of a server listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerFilter {
    /// Server belongs to the category with this id.
    Category(i32),
    /// Server belongs to a category with exactly this name.
    CategoryName(String),
    /// The user is a member or the owner of the server.
    Member(i32),
    /// Server has this id.
    Id(i32),
}

impl ServerFilter {
    /// Whether the predicate reads columns of the joined category table.
    pub fn needs_category_join(&self) -> bool {
        matches!(self, Self::CategoryName(_))
    }

    /// Builds the SQL condition for this predicate.
    pub fn condition(&self) -> Condition {
        use entity::server::Column;

        match self {
            Self::Category(category_id) => Condition::all().add(Column::CategoryId.eq(*category_id)),
            Self::CategoryName(name) => {
                Condition::all().add(entity::category::Column::Name.eq(name.as_str()))
            }
            Self::Member(user_id) => {
                let member_of = entity::prelude::ServerMember::find()
                    .select_only()
                    .column(entity::server_member::Column::ServerId)
                    .filter(entity::server_member::Column::UserId.eq(*user_id))
                    .into_query();

                Condition::any()
                    .add(Column::OwnerId.eq(*user_id))
                    .add(Column::Id.in_subquery(member_of))
            }
            Self::Id(server_id) => Condition::all().add(Column::Id.eq(*server_id)),
        }
    }
}

/// Validated listing plan handed to the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerQuery {
    /// Predicates combined with logical AND; empty means every server.
    pub filters: Vec<ServerFilter>,
    /// Annotate each returned server with its member count.
    pub with_num_members: bool,
    /// Keep only the first N servers after filtering.
    pub limit: Option<u64>,
}
