use sea_orm_migration::sea_orm::{ConnectionTrait, Database, DatabaseBackend, DbErr};

/// PostgreSQL namespace holding the catalog tables
pub const CATALOG_SCHEMA: &str = "catalog";

/// Runs `CREATE SCHEMA IF NOT EXISTS` for `schema` on PostgreSQL
///
/// Returns `false` without touching the database on other backends.
pub async fn create_schema_if_missing<C: ConnectionTrait>(
    db: &C,
    schema: &str,
) -> Result<bool, DbErr> {
    if db.get_database_backend() != DatabaseBackend::Postgres {
        return Ok(false);
    }

    db.execute_unprepared(&format!(
        "CREATE SCHEMA IF NOT EXISTS \"{}\"",
        schema.replace('"', "\"\"")
    ))
    .await?;
    Ok(true)
}

/// Creates `schema` through a connection without a `search_path`
///
/// The migrator records applied migrations in a table created before any
/// migration runs, so the schema it is pointed at must already exist.
pub async fn prepare_schema(url: &str, schema: &str) -> Result<bool, DbErr> {
    let db = Database::connect(url).await?;
    let created = create_schema_if_missing(&db, schema).await?;
    db.close().await?;
    Ok(created)
}
