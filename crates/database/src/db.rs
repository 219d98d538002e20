use log::{LevelFilter, info};
use migration::schema::prepare_schema;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a database connection pool
///
/// On PostgreSQL the `schema` namespace is created when missing and set as the
/// connection's `search_path`, so every catalog table lives under it. Other
/// backends ignore `schema`.
pub async fn create_connection(
    url: &str,
    schema: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url);
    options
        .max_connections(max_connections)
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    if is_postgres(url) {
        if prepare_schema(url, schema).await? {
            info!("Using database schema {schema}");
        }
        options.set_schema_search_path(schema);
    }

    Database::connect(options).await
}

fn is_postgres(url: &str) -> bool {
    url.starts_with("postgres://") || url.starts_with("postgresql://")
}
