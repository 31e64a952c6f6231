use std::iter;

use fastrace_macro::trace;
use reqwest::Method;
use serde_json::Value;

use crate::consts::{PREFER_HEADER, REST_API_PATH, RETURN_MINIMAL, RETURN_REPRESENTATION};
use crate::database::Database;
use crate::supabase::SupabaseClient;
use crate::types::Result;

/// Tables of a hosted project, reached over its rest api.
#[derive(Clone, Debug)]
pub struct SupabaseDatabase {
    client: SupabaseClient,
    return_rows: bool,
}

impl SupabaseDatabase {
    /// Inserts ask for a minimal response, so the caller only needs insert
    /// rights on the table and gets no rows back.
    pub fn new(client: SupabaseClient) -> Self {
        Self { client, return_rows: false }
    }

    /// Asks the rest api to echo inserted rows. Requires select rights as well.
    pub fn with_return_rows(mut self, return_rows: bool) -> Self {
        self.return_rows = return_rows;
        self
    }

    fn prefer(&self) -> &'static str {
        if self.return_rows {
            RETURN_REPRESENTATION
        } else {
            RETURN_MINIMAL
        }
    }
}

#[async_trait::async_trait]
impl Database for SupabaseDatabase {
    #[trace(name = "supabase::insert")]
    async fn insert(&self, table: &str, rows: &[Value]) -> Result<Vec<Value>> {
        let url = self
            .client
            .endpoint(REST_API_PATH.split('/').chain(iter::once(table)))?;

        let response = self
            .client
            .request(Method::POST, url)
            .header(PREFER_HEADER, self.prefer())
            .json(rows)
            .send()
            .await?;
        let body = self.client.check(response).await?.text().await?;

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&body)?)
    }
}
