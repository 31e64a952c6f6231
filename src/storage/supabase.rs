use std::iter;

use fastrace_macro::trace;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Deserialize;

use crate::consts::{STORAGE_API_PATH, UPSERT_HEADER};
use crate::domain::{FileUpload, StorageKey, UploadedObject};
use crate::storage::Storage;
use crate::supabase::SupabaseClient;
use crate::types::Result;

/// Object storage of a hosted project, reached over its http api.
#[derive(Clone, Debug)]
pub struct SupabaseStorage {
    client: SupabaseClient,
}

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(rename = "Key")]
    key: Option<String>,
    #[serde(rename = "Id")]
    id: Option<String>,
}

impl SupabaseStorage {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    fn content_type(file: &FileUpload) -> String {
        match &file.content_type {
            Some(content_type) => content_type.clone(),
            None => mime_guess::from_path(&file.name)
                .first_or_octet_stream()
                .to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Storage for SupabaseStorage {
    #[trace(name = "supabase::upload")]
    async fn upload(&self, bucket: &str, key: &StorageKey, file: &FileUpload) -> Result<UploadedObject> {
        let url = self.client.endpoint(
            STORAGE_API_PATH
                .split('/')
                .chain(iter::once(bucket))
                .chain(key.segments()?),
        )?;

        let response = self
            .client
            .request(Method::POST, url)
            .header(CONTENT_TYPE, Self::content_type(file))
            .header(UPSERT_HEADER, "false")
            .body(file.content.clone())
            .send()
            .await?;
        let body = self.client.check(response).await?.text().await?;

        let fallback_key = || format!("{}/{}", bucket, key);
        if body.trim().is_empty() {
            return Ok(UploadedObject { key: fallback_key(), id: None });
        }

        let parsed: UploadResponse = serde_json::from_str(&body)?;

        Ok(UploadedObject {
            key: parsed.key.unwrap_or_else(fallback_key),
            id: parsed.id,
        })
    }
}
