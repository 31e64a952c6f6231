use std::sync::Arc;

use sqlx::{postgres::PgPoolOptions, Executor, PgPool};

use crate::config::Config;
use crate::types::Result;

/// 1. Creates [PgPool] with default schema of [Config::db_schema]
/// 2. Connects to [Config::db_connection_string]
/// 3. Migrates database
pub async fn connect_and_migrate(config: &Config) -> Result<Arc<PgPool>> {
    let schema = config.db_schema.clone();

    let pool = PgPoolOptions::new()
        .after_connect(move |conn, _meta| {
            let schema = schema.clone();
            Box::pin(async move {
                conn.execute(format!("SET search_path = '{}';", schema).as_str())
                    .await?;

                Ok(())
            })
        })
        .max_connections(config.db_connection_pool_size.into())
        .connect(&config.db_connection_string())
        .await?;

    log::debug!("Running migrations");

    sqlx::migrate!().run(&pool).await?;

    Ok(Arc::new(pool))
}
