use super::*;

/// Tests deleting a server with both files set.
///
/// Expected: Ok(true) with banner and icon deleted and channels cascaded
#[tokio::test]
async fn deletes_banner_and_icon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let server = factory::server::ServerFactory::new(db, owner.id, category.id)
        .icon("server/1/server_icon/i.png")
        .banner("server/1/server_banner/b.jpg")
        .build()
        .await?;
    factory::channel::create_channel(db, owner.id, server.id).await?;
    factory::server_member::add_member(db, server.id, owner.id).await?;
    let blobs = MemoryBlobStore::new()
        .with_blob("server/1/server_icon/i.png")
        .with_blob("server/1/server_banner/b.jpg");

    let repo = ServerRepository::new(db, &blobs);
    let deleted = repo.delete(server.id).await?;

    assert!(deleted);
    assert_eq!(blobs.deleted().len(), 2);
    assert!(!blobs.contains("server/1/server_icon/i.png"));
    assert!(!blobs.contains("server/1/server_banner/b.jpg"));
    assert!(entity::prelude::Channel::find().all(db).await?.is_empty());
    assert!(entity::prelude::ServerMember::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that the server row is deleted even when blob deletion fails.
///
/// Expected: Ok(true) with the server gone
#[tokio::test]
async fn deletes_row_when_blob_delete_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let server = factory::server::ServerFactory::new(db, owner.id, category.id)
        .icon("server/1/server_icon/i.png")
        .build()
        .await?;
    let blobs = MemoryBlobStore::failing_deletes();

    let repo = ServerRepository::new(db, &blobs);
    let deleted = repo.delete(server.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Server::find_by_id(server.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that an owner cannot be deleted while owning a server.
///
/// Expected: Err from the RESTRICT foreign key
#[tokio::test]
async fn owner_deletion_is_restricted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _, _) = factory::helpers::create_server_with_dependencies(db).await?;

    let result = entity::prelude::User::delete_by_id(owner.id).exec(db).await;

    assert!(result.is_err());

    Ok(())
}
