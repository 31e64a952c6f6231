use crate::domain::{FileUpload, StorageKey, UploadedObject};
use crate::types::Result;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // upload never overwrites an existing object
    async fn upload(&self, bucket: &str, key: &StorageKey, file: &FileUpload) -> Result<UploadedObject>;
}
