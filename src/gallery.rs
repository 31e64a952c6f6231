use fastrace_macro::trace;
use serde_json::Value;

use crate::backend::Backend;
use crate::consts::{GALLERY_BUCKET, GALLERY_TABLE};
use crate::domain::{FileUpload, GalleryRecord, StorageKey, UploadedObject};
use crate::types::Result;

/// Uploads `file` to the gallery bucket under `public/<millis>-<file name>`.
///
/// Whatever the storage reports is handed back untouched. Nothing is retried or
/// validated and a failed upload is not cleaned up.
#[trace(name = "gallery::upload_image")]
pub async fn upload_image(backend: &Backend, file: &FileUpload) -> Result<UploadedObject> {
    let key = StorageKey::now(&file.name);
    log::debug!("Uploading {} bytes to {}/{}", file.len(), GALLERY_BUCKET, &key);

    backend.storage.upload(GALLERY_BUCKET, &key, file).await
}

/// Inserts a single gallery row badged "New" and returns the rows the store
/// reports back.
#[trace(name = "gallery::add_gallery")]
pub async fn add_gallery(
    backend: &Backend,
    title: &str,
    description: &str,
    icon: &str,
) -> Result<Vec<Value>> {
    let record = GalleryRecord::new(title, description, icon);
    log::debug!("Inserting gallery {:?} into {}", &record.title, GALLERY_TABLE);

    let row = serde_json::to_value(&record)?;

    backend.database.insert(GALLERY_TABLE, &[row]).await
}
