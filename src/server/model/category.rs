//! Category domain models and parameters.
//!
//! Categories group servers for discovery and may carry an uploaded icon stored
//! under `category/{id}/category_icon/`.

use crate::server::model::upload::{FileChange, FileUpload};

/// Category with its stored icon path.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Blob path of the icon, relative to the media root.
    pub icon: Option<String>,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            icon: entity.icon,
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<FileUpload>,
}

/// Parameters for updating a category.
///
/// Name and description are always overwritten; the icon follows `FileChange`.
#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: FileChange,
}
