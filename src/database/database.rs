use serde_json::Value;

use crate::types::Result;

#[async_trait::async_trait]
pub trait Database: Send + Sync {
    // returns the inserted rows as the store saw them, including assigned columns
    async fn insert(&self, table: &str, rows: &[Value]) -> Result<Vec<Value>>;
}
