//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with the owner and category it requires.
///
/// All entities are created with default values. Use the individual factories
/// when a test needs specific field values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, category, server))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::server::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let server = crate::factory::server::create_server(db, owner.id, category.id).await?;

    Ok((owner, category, server))
}
