use migration::schema::prepare_schema;
use sea_orm_migration::prelude::*;

#[async_std::main]
async fn main() {
    dotenvy::dotenv().ok();

    // `cli` points the connection at DATABASE_SCHEMA, which has to exist first
    if let (Ok(url), Ok(schema)) = (
        std::env::var("DATABASE_URL"),
        std::env::var("DATABASE_SCHEMA"),
    ) {
        if let Err(e) = prepare_schema(&url, &schema).await {
            eprintln!("Failed to create schema {schema}: {e}");
            std::process::exit(1);
        }
    }

    cli::run_cli(migration::Migrator).await;
}
