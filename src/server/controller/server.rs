use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, server::ServerDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::server::{ServerDtoContext, ServerListParams},
        service::server::ServerService,
        state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// Query string of the server listing endpoint.
///
/// Every value arrives as a raw string; numeric parameters are validated by the
/// service so malformed values produce the listing's own error messages.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServerListQuery {
    /// Only servers in the category with this id.
    pub category: Option<String>,
    /// Only servers in a category with exactly this name.
    pub category_name: Option<String>,
    /// `True` to list servers the caller is a member or owner of. Requires authentication.
    pub by_user: Option<String>,
    /// Keep only the first N servers.
    pub qty: Option<String>,
    /// Only the server with this id. Requires authentication.
    pub server_id: Option<String>,
    /// `True` to include the `num_members` field.
    pub with_num_members: Option<String>,
}

impl ServerListQuery {
    /// Converts the query into service parameters.
    ///
    /// Empty values count as absent and flags are set only by the exact value `True`.
    pub fn into_list_params(self) -> ServerListParams {
        ServerListParams {
            category: non_empty(self.category),
            category_name: non_empty(self.category_name),
            by_user: is_true(self.by_user.as_deref()),
            qty: non_empty(self.qty),
            server_id: non_empty(self.server_id),
            with_num_members: is_true(self.with_num_members.as_deref()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("True")
}

/// List servers.
///
/// Returns servers filtered by the optional query parameters, combined with AND, in
/// ascending id order. Each server carries its channels under `channel_server`.
///
/// # Access Control
/// - Public, except `by_user` and `server_id` which require a signed-in caller
///
/// # Returns
/// - `200 OK` - JSON array of servers
/// - `400 Bad Request` - Malformed `category`, `qty` or `server_id`, or unknown server id
/// - `401 Unauthorized` - `by_user` or `server_id` without authentication
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/server/select",
    tag = SERVER_TAG,
    params(ServerListQuery),
    responses(
        (status = 200, description = "Servers matching the filters", body = Vec<ServerDto>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "Authentication required for by_user or server_id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ServerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthSession::new(&session).get_user_id().await?;
    let params = query.into_list_params();
    let ctx = ServerDtoContext {
        with_num_members: params.with_num_members,
        media_url: &state.media_url,
    };

    let service = ServerService::new(&state.db, state.blobs.as_ref());
    let servers = service.list(params, caller).await?;

    let dtos: Vec<ServerDto> = servers
        .into_iter()
        .map(|server| server.into_dto(&ctx))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Delete a server.
///
/// Deletes the server together with its channels, memberships and stored files.
///
/// # Access Control
/// - Owner only
///
/// # Returns
/// - `204 No Content` - Server deleted
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Caller does not own the server
/// - `404 Not Found` - No server with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/server/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 204, description = "Server deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the server", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthSession::new(&session)
        .get_user_id()
        .await?
        .ok_or(AuthError::AuthenticationRequired)?;

    let service = ServerService::new(&state.db, state.blobs.as_ref());
    service.delete(id, caller).await?;

    Ok(StatusCode::NO_CONTENT)
}
