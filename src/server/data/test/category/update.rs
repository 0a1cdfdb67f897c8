use super::*;

/// Tests replacing a category icon.
///
/// Expected: Ok with the old blob deleted and the new one stored
#[tokio::test]
async fn replacing_icon_deletes_previous_blob() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::CategoryFactory::new(db)
        .name("Art")
        .icon("category/1/category_icon/old.png")
        .build()
        .await?;
    let old_icon = existing.icon.clone().unwrap();
    let blobs = MemoryBlobStore::new().with_blob(&old_icon);

    let repo = CategoryRepository::new(db, &blobs);
    let category = repo
        .update(UpdateCategoryParams {
            id: existing.id,
            name: "Art".to_string(),
            description: None,
            icon: FileChange::Replace(FileUpload::new("new.png", "new")),
        })
        .await?;

    let expected = format!("category/{}/category_icon/new.png", existing.id);
    assert_eq!(category.icon.as_deref(), Some(expected.as_str()));
    assert_eq!(blobs.deleted(), vec![old_icon.clone()]);
    assert!(!blobs.contains(&old_icon));
    assert!(blobs.contains(&expected));

    Ok(())
}

/// Tests updating scalar fields while keeping the icon.
///
/// Expected: Ok with name changed and no delete issued
#[tokio::test]
async fn keeping_icon_issues_no_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::CategoryFactory::new(db)
        .icon("category/1/category_icon/keep.png")
        .build()
        .await?;
    let blobs = MemoryBlobStore::new().with_blob("category/1/category_icon/keep.png");

    let repo = CategoryRepository::new(db, &blobs);
    let category = repo
        .update(UpdateCategoryParams {
            id: existing.id,
            name: "Renamed".to_string(),
            description: Some("Now with a description".to_string()),
            icon: FileChange::Keep,
        })
        .await?;

    assert_eq!(category.name, "Renamed");
    assert_eq!(
        category.icon.as_deref(),
        Some("category/1/category_icon/keep.png")
    );
    assert!(blobs.deleted().is_empty());

    Ok(())
}

/// Tests clearing the icon.
///
/// Expected: Ok with null icon and the blob deleted
#[tokio::test]
async fn clearing_icon_deletes_blob() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::CategoryFactory::new(db)
        .icon("category/1/category_icon/gone.png")
        .build()
        .await?;
    let blobs = MemoryBlobStore::new().with_blob("category/1/category_icon/gone.png");

    let repo = CategoryRepository::new(db, &blobs);
    let category = repo
        .update(UpdateCategoryParams {
            id: existing.id,
            name: existing.name.clone(),
            description: None,
            icon: FileChange::Clear,
        })
        .await?;

    assert_eq!(category.icon, None);
    assert!(!blobs.contains("category/1/category_icon/gone.png"));

    Ok(())
}

/// Tests that a failing blob store never blocks the update.
///
/// Expected: Ok with the row updated even though the delete failed
#[tokio::test]
async fn failed_blob_delete_does_not_block_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::CategoryFactory::new(db)
        .icon("category/1/category_icon/stuck.png")
        .build()
        .await?;
    let blobs = MemoryBlobStore::failing_deletes();

    let repo = CategoryRepository::new(db, &blobs);
    let category = repo
        .update(UpdateCategoryParams {
            id: existing.id,
            name: existing.name.clone(),
            description: None,
            icon: FileChange::Clear,
        })
        .await?;

    assert_eq!(category.icon, None);
    assert_eq!(blobs.deleted(), vec!["category/1/category_icon/stuck.png"]);

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = MemoryBlobStore::new();

    let repo = CategoryRepository::new(db, &blobs);
    let result = repo
        .update(UpdateCategoryParams {
            id: 999,
            name: "Nobody".to_string(),
            description: None,
            icon: FileChange::Keep,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
