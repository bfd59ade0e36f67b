//! Ping command - connects, runs `SELECT 1` and closes.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the ping command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let result = db.ping().await;
    db.close().await?;
    result?;

    tracing::info!("Database is reachable");
    Ok(())
}
