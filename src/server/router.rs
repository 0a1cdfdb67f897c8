use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "talk2me API", description = "Community server and channel listing"),
    components(schemas(crate::model::api::ErrorDto))
)]
pub struct ApiDoc;

/// Builds the API routes together with their OpenAPI document.
///
/// # Returns
/// - `(Router<AppState>, OpenApi)` - Routes awaiting state, and the generated document
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::server::list_servers))
        .routes(routes!(controller::server::delete_server))
        .split_for_parts()
}
