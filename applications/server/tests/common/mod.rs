/// Shared test helpers
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;
use tunedeck_server::{create_router, AppState, AuthService};

/// Create a file-backed test database with migrations applied
///
/// The TempDir must be kept alive for the duration of the test.
pub async fn create_test_pool() -> anyhow::Result<(SqlitePool, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite://{}", db_path.display());

    let pool = tunedeck_storage::create_pool(&database_url).await?;
    tunedeck_storage::run_migrations(&pool).await?;

    Ok((pool, temp_dir))
}

/// Build a full application router backed by a fresh database
pub async fn create_test_app() -> anyhow::Result<(axum::Router, SqlitePool, TempDir)> {
    let (pool, temp_dir) = create_test_pool().await?;

    let auth_service = Arc::new(AuthService::new("test-secret-key".to_string(), 7));
    let app_state = AppState::new(pool.clone(), auth_service);
    let app = create_router(app_state);

    Ok((app, pool, temp_dir))
}
