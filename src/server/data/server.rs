//! Server data repository.
//!
//! Handles server CRUD with banner/icon file lifecycle, membership, and the filtered
//! listing query with its optional member-count annotation and nested channels.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::upload::{
        apply_file_change, delete_blob_best_effort, server_banner_upload_path,
        server_icon_upload_path, store_upload,
    },
    error::AppError,
    model::{
        channel::Channel,
        server::{CreateServerParams, Server, ServerQuery, UpdateServerParams},
    },
    storage::BlobStore,
};

/// Best-effort removal of every file a server row references.
///
/// Shared by direct server deletion and by category deletion, whose database
/// cascade removes servers without passing through this repository.
pub(crate) async fn delete_server_files(blobs: &dyn BlobStore, server: &entity::server::Model) {
    for path in [server.icon.as_deref(), server.banner.as_deref()]
        .into_iter()
        .flatten()
    {
        delete_blob_best_effort(blobs, path).await;
    }
}

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
    blobs: &'a dyn BlobStore,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, blobs: &'a dyn BlobStore) -> Self {
        Self { db, blobs }
    }

    /// Creates a server and stores its banner and icon under the new server's namespace.
    ///
    /// # Returns
    /// - `Ok(Server)` - The created server, without channels or annotation
    /// - `Err(AppError::StorageErr)` - Failed to store an upload
    /// - `Err(AppError::DbErr)` - Database error, including unknown owner or category
    pub async fn create(&self, params: CreateServerParams) -> Result<Server, AppError> {
        let server = entity::server::ActiveModel {
            name: ActiveValue::Set(params.name),
            owner_id: ActiveValue::Set(params.owner_id),
            category_id: ActiveValue::Set(params.category_id),
            description: ActiveValue::Set(params.description),
            banner: ActiveValue::Set(None),
            icon: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if params.banner.is_none() && params.icon.is_none() {
            return Ok(Server::from_entity(server));
        }

        let server_id = server.id;
        let banner = match params.banner {
            Some(upload) => Some(
                store_upload(self.blobs, &upload, |f| {
                    server_banner_upload_path(server_id, f)
                })
                .await?,
            ),
            None => None,
        };
        let icon = match params.icon {
            Some(upload) => Some(
                store_upload(self.blobs, &upload, |f| server_icon_upload_path(server_id, f))
                    .await?,
            ),
            None => None,
        };

        let mut active_model: entity::server::ActiveModel = server.into();
        active_model.banner = ActiveValue::Set(banner);
        active_model.icon = ActiveValue::Set(icon);
        let server = active_model.update(self.db).await?;

        Ok(Server::from_entity(server))
    }

    /// Gets a server by ID without channels or annotation.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Server>, DbErr> {
        let server = entity::prelude::Server::find_by_id(id).one(self.db).await?;

        Ok(server.map(Server::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Server::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Updates a server, deleting each stored file whose reference changes.
    ///
    /// Banner and icon are compared independently, so replacing one never touches
    /// the other's blob.
    ///
    /// # Returns
    /// - `Ok(Server)` - The updated server, without channels or annotation
    /// - `Err(AppError::NotFound)` - No server with that id
    /// - `Err(AppError::StorageErr)` - Failed to store a new upload
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateServerParams) -> Result<Server, AppError> {
        let existing = entity::prelude::Server::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Server with id {} not found", params.id)))?;

        let server_id = existing.id;
        let icon = apply_file_change(self.blobs, existing.icon.as_deref(), params.icon, |f| {
            server_icon_upload_path(server_id, f)
        })
        .await?;
        let banner = apply_file_change(
            self.blobs,
            existing.banner.as_deref(),
            params.banner,
            |f| server_banner_upload_path(server_id, f),
        )
        .await?;

        let mut active_model: entity::server::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.category_id = ActiveValue::Set(params.category_id);
        active_model.description = ActiveValue::Set(params.description);
        active_model.icon = ActiveValue::Set(icon);
        active_model.banner = ActiveValue::Set(banner);
        let server = active_model.update(self.db).await?;

        Ok(Server::from_entity(server))
    }

    /// Deletes a server after removing its banner and icon blobs.
    ///
    /// Channels and memberships are removed by the database cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Server deleted
    /// - `Ok(false)` - No server with that id
    /// - `Err(AppError::DbErr)` - Database error; blob failures are only logged
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(server) = entity::prelude::Server::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };

        delete_server_files(self.blobs, &server).await;

        entity::prelude::Server::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!("Deleted server {}", id);

        Ok(true)
    }

    /// Adds a user to the server's member set.
    pub async fn add_member(&self, server_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::server_member::ActiveModel {
            server_id: ActiveValue::Set(server_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Lists servers matching every filter of the query.
    ///
    /// Filters are combined into one AND predicate. Results are in ascending id
    /// order and truncated to `query.limit`. Each server carries its channels and,
    /// when requested, a member count that is zero for servers without members.
    ///
    /// # Arguments
    /// - `query` - Validated filter plan, annotation flag and limit
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn find_filtered(&self, query: &ServerQuery) -> Result<Vec<Server>, DbErr> {
        let mut select = entity::prelude::Server::find();

        if query.filters.iter().any(|f| f.needs_category_join()) {
            select = select.join(JoinType::InnerJoin, entity::server::Relation::Category.def());
        }

        let condition = query
            .filters
            .iter()
            .fold(Condition::all(), |condition, filter| {
                condition.add(filter.condition())
            });

        let mut select = select
            .filter(condition)
            .order_by_asc(entity::server::Column::Id);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let entities = select.all(self.db).await?;
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let server_ids: Vec<i32> = entities.iter().map(|s| s.id).collect();

        let mut member_counts = if query.with_num_members {
            Some(self.count_members(&server_ids).await?)
        } else {
            None
        };

        let mut channels_by_server: HashMap<i32, Vec<Channel>> = HashMap::new();
        for channel in entity::prelude::Channel::find()
            .filter(entity::channel::Column::ServerId.is_in(server_ids))
            .order_by_asc(entity::channel::Column::Id)
            .all(self.db)
            .await?
        {
            channels_by_server
                .entry(channel.server_id)
                .or_default()
                .push(Channel::from_entity(channel));
        }

        let servers = entities
            .into_iter()
            .map(|entity| {
                let mut server = Server::from_entity(entity);
                server.channels = channels_by_server.remove(&server.id).unwrap_or_default();
                server.num_members = member_counts
                    .as_mut()
                    .map(|counts| counts.remove(&server.id).unwrap_or(0));
                server
            })
            .collect();

        Ok(servers)
    }

    /// Counts members per server with a single grouped query.
    ///
    /// Servers without members are absent from the returned map.
    async fn count_members(&self, server_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::ServerMember::find()
            .select_only()
            .column(entity::server_member::Column::ServerId)
            .column_as(entity::server_member::Column::UserId.count(), "num_members")
            .filter(entity::server_member::Column::ServerId.is_in(server_ids.to_vec()))
            .group_by(entity::server_member::Column::ServerId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(server_id, count)| (server_id, count.max(0) as u64))
            .collect())
    }
}
