use super::*;

/// Tests deleting a category with an icon.
///
/// Expected: Ok(true) with exactly one delete call for the icon path
#[tokio::test]
async fn deletes_icon_with_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .icon("category/1/category_icon/logo.png")
        .build()
        .await?;
    let blobs = MemoryBlobStore::new().with_blob("category/1/category_icon/logo.png");

    let repo = CategoryRepository::new(db, &blobs);
    let deleted = repo.delete(category.id).await?;

    assert!(deleted);
    assert_eq!(blobs.deleted(), vec!["category/1/category_icon/logo.png"]);
    assert!(entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a category without an icon.
///
/// Expected: Ok(true) with no delete call issued
#[tokio::test]
async fn issues_no_delete_without_icon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let blobs = MemoryBlobStore::new();

    let repo = CategoryRepository::new(db, &blobs);
    let deleted = repo.delete(category.id).await?;

    assert!(deleted);
    assert!(blobs.deleted().is_empty());

    Ok(())
}

/// Tests that deleting a category cleans up the files of its cascaded servers.
///
/// Expected: Ok(true) with server banner and icon deleted and the servers gone
#[tokio::test]
async fn cleans_up_files_of_cascaded_servers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let server = factory::server::ServerFactory::new(db, owner.id, category.id)
        .icon("server/1/server_icon/i.png")
        .banner("server/1/server_banner/b.png")
        .build()
        .await?;
    factory::channel::create_channel(db, owner.id, server.id).await?;
    let blobs = MemoryBlobStore::new()
        .with_blob("server/1/server_icon/i.png")
        .with_blob("server/1/server_banner/b.png");

    let repo = CategoryRepository::new(db, &blobs);
    repo.delete(category.id).await?;

    assert!(!blobs.contains("server/1/server_icon/i.png"));
    assert!(!blobs.contains("server/1/server_banner/b.png"));
    assert!(entity::prelude::Server::find_by_id(server.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Channel::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = MemoryBlobStore::new();

    let repo = CategoryRepository::new(db, &blobs);
    let deleted = repo.delete(42).await?;

    assert!(!deleted);
    assert!(blobs.deleted().is_empty());

    Ok(())
}
