use super::*;

/// Tests that the owner can delete their server and its files.
///
/// Expected: Ok with the icon blob deleted
#[tokio::test]
async fn owner_deletes_server() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let server = factory::server::ServerFactory::new(db, owner.id, category.id)
        .icon("server/1/server_icon/i.png")
        .build()
        .await?;
    let blobs = MemoryBlobStore::new().with_blob("server/1/server_icon/i.png");

    let service = ServerService::new(db, &blobs);
    service.delete(server.id, owner.id).await?;

    assert_eq!(blobs.deleted(), vec!["server/1/server_icon/i.png"]);
    assert!(service.list(ServerListParams::default(), None).await?.is_empty());

    Ok(())
}

/// Tests that another user cannot delete the server.
///
/// Expected: Err(AccessDenied) with nothing deleted
#[tokio::test]
async fn non_owner_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let blobs = MemoryBlobStore::new();

    let service = ServerService::new(db, &blobs);
    let result = service.delete(server.id, intruder.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.list(ServerListParams::default(), None).await?.len(), 1);
    assert!(blobs.deleted().is_empty());

    Ok(())
}

/// Tests deleting a server that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_server_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user(db).await?;
    let blobs = MemoryBlobStore::new();

    let service = ServerService::new(db, &blobs);
    let result = service.delete(77, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
