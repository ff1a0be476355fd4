use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, state::AppState};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the bot can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Binds the health endpoint listener.
///
/// Binding happens before the bot connects so a port conflict fails startup instead of
/// surfacing later inside the spawned server task.
///
/// # Returns
/// - `Ok(TcpListener)` - Listener bound to `config.health_addr`
/// - `Err(AppError::IoErr)` - The address could not be bound
pub async fn bind_health_listener(config: &Config) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(config.health_addr).await?;

    tracing::info!("Health endpoint listening on {}", config.health_addr);

    Ok(listener)
}

/// Serves the health router until the process exits.
pub async fn serve_health(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    let app = router::router().with_state(state);

    axum::serve(listener, app).await?;

    Ok(())
}
