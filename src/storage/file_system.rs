use std::path::{Path, PathBuf};

use fastrace_macro::trace;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::domain::{FileUpload, StorageKey, UploadedObject};
use crate::storage::Storage;
use crate::types::{BackendError, GalleryError, Result};

/// Stores objects under `<base_path>/<bucket>/<key>` on the local disk.
#[derive(Debug)]
pub struct FileSystem {
    base_path: PathBuf,
}

impl FileSystem {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        FileSystem { base_path: base_path.into() }
    }

    fn get_path(&self, bucket: &str, key: &StorageKey) -> Result<PathBuf> {
        let mut path_buf = self.base_path.clone();
        path_buf.push(bucket);
        for segment in key.segments()? {
            path_buf.push(segment);
        }
        Ok(path_buf)
    }

    #[trace(name = "file_system::create_dir")]
    async fn create_dir(&self, path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) => Ok(tokio::fs::create_dir_all(parent).await?),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Storage for FileSystem {
    #[trace(name = "file_system::upload")]
    async fn upload(&self, bucket: &str, key: &StorageKey, file: &FileUpload) -> Result<UploadedObject> {
        let path = self.get_path(bucket, key)?;

        self.create_dir(&path).await?;

        let handle = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;

        match handle {
            Ok(mut handle) => {
                handle.write_all(&file.content).await?;
                handle.flush().await?;

                log::debug!("Stored {} bytes at {:?}", file.len(), &path);

                Ok(UploadedObject {
                    key: format!("{}/{}", bucket, key),
                    id: None,
                })
            }
            Err(e) => match e.kind() {
                std::io::ErrorKind::AlreadyExists => Err(GalleryError::Backend(BackendError::new(
                    409,
                    Some("Duplicate".to_owned()),
                    "The resource already exists",
                ))),
                _ => Err(e.into()),
            },
        }
    }
}
