use std::sync::Arc;

use crate::config::Config;
use crate::database::{Database, Postgres, SupabaseDatabase};
use crate::db::connect_and_migrate;
use crate::storage::{FileSystem, Storage, SupabaseStorage};
use crate::supabase::SupabaseClient;
use crate::types::{GalleryError, Result};

/// Pre-configured handle exposing the storage and table-insert capabilities.
#[derive(Clone)]
pub struct Backend {
    pub storage: Arc<dyn Storage>,
    pub database: Arc<dyn Database>,
}

impl Backend {
    pub fn new(storage: Arc<dyn Storage>, database: Arc<dyn Database>) -> Self {
        Self { storage, database }
    }

    /// 1. Builds the storage selected by [Config::storage_type]
    /// 2. Builds the database selected by [Config::database_type], connecting and
    ///    migrating when it is postgres
    pub async fn from_config(config: &Config) -> Result<Self> {
        let storage: Arc<dyn Storage> = match config.storage_type.as_str() {
            "supabase" => Arc::new(SupabaseStorage::new(supabase_client(config)?)),
            "file_system" => Arc::new(FileSystem::new(config.storage_base_path.as_str())),
            other => {
                return Err(GalleryError::InvalidConfig(format!(
                    "unknown STORAGE_TYPE {}",
                    other
                )))
            }
        };

        let database: Arc<dyn Database> = match config.database_type.as_str() {
            "supabase" => Arc::new(
                SupabaseDatabase::new(supabase_client(config)?)
                    .with_return_rows(config.supabase_return_rows),
            ),
            "postgres" => Arc::new(Postgres::new(connect_and_migrate(config).await?)),
            other => {
                return Err(GalleryError::InvalidConfig(format!(
                    "unknown DATABASE_TYPE {}",
                    other
                )))
            }
        };

        log::debug!(
            "Using {} storage and {} database",
            &config.storage_type,
            &config.database_type
        );

        Ok(Self::new(storage, database))
    }
}

fn supabase_client(config: &Config) -> Result<SupabaseClient> {
    match (&config.supabase_url, &config.supabase_key) {
        (Some(url), Some(key)) => SupabaseClient::new(url, key.as_str()),
        (None, _) => Err(GalleryError::InvalidConfig("SUPABASE_URL not set".to_owned())),
        (_, None) => Err(GalleryError::InvalidConfig("SUPABASE_KEY not set".to_owned())),
    }
}
