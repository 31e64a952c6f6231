#![allow(dead_code)]

pub mod config;
pub mod containers;

use std::sync::{Arc, Mutex};

use gallery_store::database::Database;
use gallery_store::domain::{FileUpload, StorageKey, UploadedObject};
use gallery_store::storage::Storage;
use gallery_store::types::{BackendError, GalleryError, Result};
use gallery_store::Backend;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct UploadCall {
    pub bucket: String,
    pub key: StorageKey,
    pub file: FileUpload,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InsertCall {
    pub table: String,
    pub rows: Vec<Value>,
}

/// Records every upload and answers with a canned result.
#[derive(Default)]
pub struct FakeStorage {
    pub calls: Mutex<Vec<UploadCall>>,
    pub fail_with: Option<BackendError>,
}

#[async_trait::async_trait]
impl Storage for FakeStorage {
    async fn upload(&self, bucket: &str, key: &StorageKey, file: &FileUpload) -> Result<UploadedObject> {
        self.calls.lock().unwrap().push(UploadCall {
            bucket: bucket.to_owned(),
            key: key.clone(),
            file: file.clone(),
        });

        match &self.fail_with {
            Some(err) => Err(GalleryError::Backend(err.clone())),
            None => Ok(UploadedObject {
                key: format!("{}/{}", bucket, key),
                id: Some("fake-id".to_owned()),
            }),
        }
    }
}

/// Records every insert and echoes the rows back with an assigned id.
#[derive(Default)]
pub struct FakeDatabase {
    pub calls: Mutex<Vec<InsertCall>>,
    pub fail_with: Option<BackendError>,
}

#[async_trait::async_trait]
impl Database for FakeDatabase {
    async fn insert(&self, table: &str, rows: &[Value]) -> Result<Vec<Value>> {
        self.calls.lock().unwrap().push(InsertCall {
            table: table.to_owned(),
            rows: rows.to_vec(),
        });

        if let Some(err) = &self.fail_with {
            return Err(GalleryError::Backend(err.clone()));
        }

        Ok(rows
            .iter()
            .enumerate()
            .map(|(id, row)| {
                let mut row = row.clone();
                if let Some(fields) = row.as_object_mut() {
                    fields.insert("id".to_owned(), Value::from(id + 1));
                }
                row
            })
            .collect())
    }
}

pub fn fake_backend(
    storage: FakeStorage,
    database: FakeDatabase,
) -> (Backend, Arc<FakeStorage>, Arc<FakeDatabase>) {
    let storage = Arc::new(storage);
    let database = Arc::new(database);

    (
        Backend::new(storage.clone(), database.clone()),
        storage,
        database,
    )
}
