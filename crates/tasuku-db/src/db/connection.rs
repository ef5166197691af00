use diesel::{Connection, SqliteConnection};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Async-capable SQLite connection.
pub type SqliteAsync = SyncConnectionWrapper<SqliteConnection>;
pub type DbPool = Pool<SqliteAsync>;
pub type DbConnection<'pool> = PooledConnection<'pool, SqliteAsync>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// ## Summary
/// Opens (creating if needed) the database file and applies pending migrations.
///
/// Runs on the blocking thread pool with its own connection, so call it
/// before [`create_pool`].
///
/// ## Errors
/// Returns an error if the database can't be opened or a migration fails.
#[tracing::instrument]
pub async fn run_migrations(database_url: &str) -> anyhow::Result<()> {
    let url = database_url.to_owned();

    let applied = tokio::task::spawn_blocking(move || -> anyhow::Result<usize> {
        let mut conn = SqliteConnection::establish(&url)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| anyhow::anyhow!(err))?;
        Ok(applied.len())
    })
    .await??;

    tracing::info!(applied, "Database migrations up to date");
    Ok(())
}

/// ## Summary
/// Creates a new database connection pool.
///
/// ## Errors
/// Returns an error if the pool cannot be created with the provided database URL.
#[tracing::instrument(skip(database_url), fields(pool_size = size))]
pub async fn create_pool(database_url: &str, size: u32) -> anyhow::Result<DbPool> {
    tracing::debug!("Creating database connection pool");

    let config = AsyncDieselConnectionManager::<SqliteAsync>::new(database_url);

    let pool = Pool::builder()
        .max_size(size)
        .min_idle(Some(size))
        .test_on_check_out(false)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(config)
        .await?;

    tracing::info!(
        pool_size = size,
        "Database connection pool created successfully"
    );

    Ok(pool)
}
