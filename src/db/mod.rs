pub mod listingdb;
pub mod memorydb;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use crate::config::Config;

/// Postgres-backed store client. All listing operations hang off this through
/// the [`listingdb::ListingStoreExt`] trait.
#[derive(Clone)]
pub struct DBClient {
    pub pool: Pool<Postgres>,
}

impl std::fmt::Debug for DBClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DBClient").field("pool", &"Pool<Postgres>").finish()
    }
}

impl DBClient {
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient { pool }
    }
}

/// Connect a pool sized from the configuration.
pub async fn create_pool(config: &Config) -> Result<Pool<Postgres>, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to the database");
    Ok(pool)
}

/// Apply the embedded migrations. Run once at startup, before the first
/// listing operation.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}
