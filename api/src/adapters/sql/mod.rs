//! SQL adapters
//!
//! Implementations of port traits using SeaORM. The engine follows the
//! connection URL: `sqlite://` for an embedded file database, `postgres://`
//! for a database server.

pub mod shipment_store;


use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entity::shipments;
use crate::error::DomainError;

pub use shipment_store::SqlShipmentStore;

/// Open the connection pool and make sure the schema exists
pub async fn connect(
    url: &str,
    max_connections: u32,
    sql_logging: bool,
) -> Result<DatabaseConnection, DomainError> {
    let options = connect_options(url, max_connections, sql_logging);

    let db = Database::connect(options)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    ensure_schema(&db).await?;

    Ok(db)
}

/// Create the `shipments` table if it is absent
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(shipments::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::debug!("Schema ready ({:?})", backend);
    Ok(())
}

/// How long the single in-memory SQLite connection may live or sit idle
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

fn connect_options(url: &str, max_connections: u32, sql_logging: bool) -> ConnectOptions {
    let mut options = ConnectOptions::new(url.to_string());
    if is_in_memory_sqlite(url) {
        // The database lives and dies with its one connection
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
    } else {
        options.max_connections(max_connections);
    }
    options.sqlx_logging(sql_logging);
    options
}

fn is_in_memory_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:") && (url.contains(":memory:") || url.contains("mode=memory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_sqlite() {
        assert!(is_in_memory_sqlite("sqlite::memory:"));
        assert!(is_in_memory_sqlite("sqlite://file:test?mode=memory"));
        assert!(!is_in_memory_sqlite("sqlite://shipments.db?mode=rwc"));
        assert!(!is_in_memory_sqlite("postgres://localhost/memory"));
    }

    #[test]
    fn in_memory_sqlite_keeps_its_connection() {
        let options = connect_options("sqlite::memory:", 10, false);

        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
    }

    #[test]
    fn file_database_uses_configured_pool_size() {
        let options = connect_options("sqlite://shipments.db?mode=rwc", 10, true);

        assert_eq!(options.get_max_connections(), Some(10));
        assert_eq!(options.get_min_connections(), None);
        assert!(options.get_sqlx_logging());
    }
}
