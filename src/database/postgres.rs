use std::sync::Arc;

use fastrace_macro::trace;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::database::Database;
use crate::types::{GalleryError, Result};

/// Direct connection to the project's postgres instance.
#[derive(Clone, Debug)]
pub struct Postgres {
    pool: Arc<PgPool>,
}

impl Postgres {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// Only the columns present in the row are written so the store fills in
/// defaults and identity columns for the rest.
fn insert_statement(table: &str, row: &Map<String, Value>) -> String {
    let table = quote_identifier(table);

    if row.is_empty() {
        return format!("INSERT INTO {table} DEFAULT VALUES RETURNING to_jsonb({table}.*)");
    }

    let columns = row
        .keys()
        .map(|column| quote_identifier(column))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {table} ({columns}) SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1) RETURNING to_jsonb({table}.*)"
    )
}

#[async_trait::async_trait]
impl Database for Postgres {
    #[trace(name = "postgres::insert")]
    async fn insert(&self, table: &str, rows: &[Value]) -> Result<Vec<Value>> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(rows.len());

        for row in rows {
            let fields = row.as_object().ok_or_else(|| {
                GalleryError::InvalidRow(format!("expected a json object, got {}", row))
            })?;
            let statement = insert_statement(table, fields);
            log::trace!("{}", &statement);

            let query = sqlx::query_scalar::<_, Json<Value>>(&statement);
            let query = if fields.is_empty() { query } else { query.bind(Json(row)) };
            let Json(value) = query.fetch_one(&mut *tx).await?;

            inserted.push(value);
        }

        tx.commit().await?;

        Ok(inserted)
    }
}
