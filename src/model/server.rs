use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChannelDto {
    pub id: i32,
    pub name: String,
    pub topic: String,
    /// ID of the user owning the channel.
    pub owner: i32,
    /// ID of the server the channel belongs to.
    pub server: i32,
}

/// Server representation returned by the listing endpoint.
///
/// The member set is never part of the representation. `num_members` is only
/// serialized when the request asked for the member count annotation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_members: Option<u64>,
    pub channel_server: Vec<ChannelDto>,
    pub name: String,
    pub description: Option<String>,
    /// Media URL of the banner image.
    pub banner: Option<String>,
    /// Media URL of the icon image.
    pub icon: Option<String>,
    /// ID of the user owning the server.
    pub owner: i32,
    /// ID of the category the server is listed under.
    pub category: i32,
}
