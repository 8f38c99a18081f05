use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::database;

/// Shared application state, constructed once in main and passed down
/// to handlers instead of living in ambient globals.
pub struct AppState {
    pub config: AppConfig,
    pub db: SqlitePool,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let db = database::pool::connect(&config.database).await?;

        sqlx::migrate!("./migrations").run(&db).await?;

        database::seed::seed_demo_data(&db).await?;

        Ok(Self { config, db })
    }
}
