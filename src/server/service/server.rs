use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::{auth::AuthError, AppError},
    model::server::{Server, ServerFilter, ServerListParams, ServerQuery},
    storage::BlobStore,
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
    blobs: &'a dyn BlobStore,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection, blobs: &'a dyn BlobStore) -> Self {
        Self { db, blobs }
    }

    /// Lists servers according to the listing parameters.
    ///
    /// The authentication gate runs before any parameter is validated or the store is
    /// touched: asking for `by_user` or `server_id` without a caller always fails with
    /// 401, whatever the other parameters contain.
    ///
    /// # Arguments
    /// - `params` - Raw listing parameters, empty values already dropped
    /// - `caller` - ID of the signed-in user, if any
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers in ascending id order
    /// - `Err(AppError::AuthErr(AuthenticationRequired))` - Auth-only parameter without caller
    /// - `Err(AppError::BadRequest)` - Malformed `category`, `qty` or `server_id`, or unknown server id
    ///
    /// A `qty` above what SQLite can bind is capped; a `category` outside the id range
    /// matches nothing.
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        params: ServerListParams,
        caller: Option<i32>,
    ) -> Result<Vec<Server>, AppError> {
        if (params.by_user || params.server_id.is_some()) && caller.is_none() {
            return Err(AuthError::AuthenticationRequired.into());
        }

        let category = params
            .category
            .as_deref()
            .map(|raw| parse_param::<i128>(raw, "Invalid category id format."))
            .transpose()?;
        let limit = params
            .qty
            .as_deref()
            .map(|raw| parse_param::<u128>(raw, "Invalid qty format."))
            .transpose()?
            .map(clamp_limit);
        let server_id = params
            .server_id
            .as_deref()
            .map(|raw| parse_param::<i128>(raw, "Invalid server id format."))
            .transpose()?;

        let repo = ServerRepository::new(self.db, self.blobs);

        let server_id = match server_id {
            Some(requested) => {
                let id = match i32::try_from(requested) {
                    Ok(id) if repo.exists(id).await? => id,
                    _ => {
                        return Err(AppError::BadRequest(format!(
                            "Server with id {} does not exist.",
                            requested
                        )))
                    }
                };
                Some(id)
            }
            None => None,
        };

        // ids beyond the column range match no category
        let category = match category.map(i32::try_from).transpose() {
            Ok(category) => category,
            Err(_) => return Ok(Vec::new()),
        };

        let filters: Vec<ServerFilter> = [
            category.map(ServerFilter::Category),
            params.category_name.map(ServerFilter::CategoryName),
            caller
                .filter(|_| params.by_user)
                .map(ServerFilter::Member),
            server_id.map(ServerFilter::Id),
        ]
        .into_iter()
        .flatten()
        .collect();

        let query = ServerQuery {
            filters,
            with_num_members: params.with_num_members,
            limit,
        };

        Ok(repo.find_filtered(&query).await?)
    }

    /// Deletes a server owned by the caller, together with its stored files.
    ///
    /// # Returns
    /// - `Ok(())` - Server deleted
    /// - `Err(AppError::NotFound)` - No server with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller does not own the server
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32, caller: i32) -> Result<(), AppError> {
        let repo = ServerRepository::new(self.db, self.blobs);

        let server = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Server with id {} not found", id)))?;

        if server.owner_id != caller {
            return Err(AuthError::AccessDenied(
                caller,
                format!("attempted to delete server {} owned by {}", id, server.owner_id),
            )
            .into());
        }

        repo.delete(id).await?;

        Ok(())
    }
}

/// Caps a requested limit at the largest value SQLite can bind.
fn clamp_limit(qty: u128) -> u64 {
    qty.min(i64::MAX as u128) as u64
}

/// Parses a trimmed query parameter, mapping failure to a 400 with `message`.
fn parse_param<T: std::str::FromStr>(raw: &str, message: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(message.to_string()))
}
