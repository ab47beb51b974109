use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};
use tracing::{event, Level};

use crate::settings::types::Settings;

/// Opens the pool and brings the schema up to date.
///
/// Every statement waits at most `acquire_timeout_seconds` for a connection, so a stalled
/// database surfaces to handlers as a `DbErr` instead of hanging the request.
pub async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(settings.database.url.to_owned());
    options
        .acquire_timeout(Duration::from_secs(settings.database.acquire_timeout_seconds))
        .sqlx_logging(settings.debug);
    if settings.database.url.starts_with("sqlite::memory:") {
        // An in-memory database lives and dies with its connection.
        options.max_connections(1).min_connections(1);
    }
    let db_conn = Database::connect(options).await?;
    Migrator::up(&db_conn, None).await?;
    event!(target: "backend", Level::INFO, "Database migrated: {:?}", db_conn.get_database_backend());
    Ok(db_conn)
}
