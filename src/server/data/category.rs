//! Category data repository.
//!
//! Besides plain CRUD, the repository owns the icon lifecycle: the icon blob is
//! replaced on update and removed, together with the files of every cascaded
//! server, when the category is deleted.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{
    data::{
        server::delete_server_files,
        upload::{
            apply_file_change, category_icon_upload_path, delete_blob_best_effort, store_upload,
        },
    },
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
    storage::BlobStore,
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
    blobs: &'a dyn BlobStore,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, blobs: &'a dyn BlobStore) -> Self {
        Self { db, blobs }
    }

    /// Creates a category, storing its icon under the new category's namespace.
    ///
    /// The row is inserted first because the icon path embeds the category id.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            icon: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let Some(upload) = params.icon else {
            return Ok(Category::from_entity(category));
        };

        let category_id = category.id;
        let icon = store_upload(self.blobs, &upload, |f| {
            category_icon_upload_path(category_id, f)
        })
        .await?;

        let mut active_model: entity::category::ActiveModel = category.into();
        active_model.icon = ActiveValue::Set(Some(icon));
        let category = active_model.update(self.db).await?;

        Ok(Category::from_entity(category))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        let category = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(category.map(Category::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Updates a category, deleting the previously stored icon if it changes.
    ///
    /// # Returns
    /// - `Ok(Category)` - The updated category
    /// - `Err(AppError::NotFound)` - No category with that id
    /// - `Err(AppError::StorageErr)` - Failed to store the new icon
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        let existing = entity::prelude::Category::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Category with id {} not found", params.id))
            })?;

        let category_id = existing.id;
        let icon = apply_file_change(self.blobs, existing.icon.as_deref(), params.icon, |f| {
            category_icon_upload_path(category_id, f)
        })
        .await?;

        let mut active_model: entity::category::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.icon = ActiveValue::Set(icon);
        let category = active_model.update(self.db).await?;

        Ok(Category::from_entity(category))
    }

    /// Deletes a category and every server in it.
    ///
    /// The database cascades the delete to servers, channels and memberships, so the
    /// file cleanup of each cascaded server runs here, in the pre-delete phase, followed
    /// by the category's own icon.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with that id
    /// - `Err(AppError::DbErr)` - Database error; blob failures are only logged
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(category) = entity::prelude::Category::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };

        let servers = entity::prelude::Server::find()
            .filter(entity::server::Column::CategoryId.eq(id))
            .all(&txn)
            .await?;

        for server in &servers {
            delete_server_files(self.blobs, server).await;
        }

        if let Some(icon) = category.icon.as_deref() {
            delete_blob_best_effort(self.blobs, icon).await;
        }

        entity::prelude::Category::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            "Deleted category {} with {} cascaded servers",
            id,
            servers.len()
        );

        Ok(true)
    }
}
