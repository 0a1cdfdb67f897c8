//! Server membership factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a user to a server's member set.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - ID of the server
/// - `user_id` - ID of the user joining the server
///
/// # Returns
/// - `Ok(entity::server_member::Model)` - Created membership row
/// - `Err(DbErr)` - Database error, including a duplicate membership
pub async fn add_member(
    db: &DatabaseConnection,
    server_id: i32,
    user_id: i32,
) -> Result<entity::server_member::Model, DbErr> {
    entity::server_member::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}

/// Creates `count` fresh users and adds each of them to the server.
///
/// # Returns
/// - `Ok(Vec<entity::user::Model>)` - The users that joined
/// - `Err(DbErr)` - Database error during creation
pub async fn add_new_members(
    db: &DatabaseConnection,
    server_id: i32,
    count: usize,
) -> Result<Vec<entity::user::Model>, DbErr> {
    let mut users = Vec::with_capacity(count);
    for _ in 0..count {
        let user = crate::factory::user::create_user(db).await?;
        add_member(db, server_id, user.id).await?;
        users.push(user);
    }

    Ok(users)
}
