pub mod entities;
pub mod migrator;
pub mod repositories;

use sea_orm::{Database, DatabaseConnection};
use tracing::info;

/// Open a database connection from a connection URL.
///
/// The URL normally comes from
/// [`DatabaseSettings::connection_url`](crate::config::DatabaseSettings::connection_url);
/// tests pass `"sqlite::memory:"` directly.
pub async fn init_database(url: &str) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", url);
    let db = Database::connect(url).await?;
    info!("Database connected successfully");
    Ok(db)
}
