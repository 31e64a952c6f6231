use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BADGE_TEXT, KEY_PREFIX, KEY_SEPARATOR};
use crate::types::{GalleryError, Result};

/// A named blob handed to the uploader.
#[derive(Clone, Debug, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub content: Bytes,
    pub content_type: Option<String>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Object key inside a bucket, `public/<millis>-<file name>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Keys are only as unique as the millisecond clock: two files with the same
    /// name derived within the same millisecond collide.
    pub fn derive(at: DateTime<Utc>, file_name: &str) -> Self {
        StorageKey(format!(
            "{}{}{}{}",
            KEY_PREFIX,
            at.timestamp_millis(),
            KEY_SEPARATOR,
            file_name
        ))
    }

    pub fn now(file_name: &str) -> Self {
        Self::derive(Utc::now(), file_name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the key on `/`. Empty, `.` and `..` segments are refused since
    /// they would resolve to a different object than the one reported back.
    pub fn segments(&self) -> Result<Vec<&str>> {
        self.0
            .split('/')
            .map(|segment| match segment {
                "" | "." | ".." => Err(GalleryError::InvalidKey(format!(
                    "{:?} has an empty or relative segment",
                    &self.0
                ))),
                segment if segment.contains(['\\', '\0']) => Err(GalleryError::InvalidKey(
                    format!("{:?} has a segment {:?} with a reserved character", &self.0, segment),
                )),
                segment => Ok(segment),
            })
            .collect()
    }
}

impl From<&str> for StorageKey {
    fn from(key: &str) -> Self {
        StorageKey(key.to_owned())
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the storage service reports back for a stored object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedObject {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Row inserted into the galleries table. Identity columns belong to the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryRecord {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub badge_text: String,
}

impl GalleryRecord {
    pub fn new(title: &str, description: &str, icon: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            badge_text: DEFAULT_BADGE_TEXT.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn key_layout() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let key = StorageKey::derive(at, "cat.png");

        assert_eq!(key.as_str(), "public/1700000000123-cat.png");
    }

    #[test]
    fn key_keeps_name_verbatim() {
        let key = StorageKey::now("my holiday-photo (1).JPG");
        let middle = key
            .as_str()
            .strip_prefix("public/")
            .and_then(|rest| rest.strip_suffix("-my holiday-photo (1).JPG"))
            .unwrap();

        assert!(!middle.is_empty());
        assert!(middle.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn distinct_millis_distinct_keys() {
        let first = Utc.timestamp_millis_opt(1_000).unwrap();
        let second = Utc.timestamp_millis_opt(1_001).unwrap();

        assert_ne!(
            StorageKey::derive(first, "a.png"),
            StorageKey::derive(second, "a.png")
        );
        assert_eq!(
            StorageKey::derive(first, "a.png"),
            StorageKey::derive(first, "a.png")
        );
    }

    #[test]
    fn segments_of_derived_key() {
        let key = StorageKey::from("public/12-cat.png");

        assert_eq!(key.segments().unwrap(), vec!["public", "12-cat.png"]);
    }

    #[test]
    fn relative_segments_rejected() {
        let at = Utc.timestamp_millis_opt(1).unwrap();
        let keys = [
            StorageKey::derive(at, "../../../../escaped.txt"),
            StorageKey::derive(at, "a/../b.png"),
            StorageKey::derive(at, "a/./b.png"),
            StorageKey::derive(at, "dir/"),
            StorageKey::from("/absolute.png"),
            StorageKey::from("public//double.png"),
            StorageKey::from("public/1-back\\slash.png"),
        ];

        for key in keys {
            assert!(
                matches!(key.segments(), Err(GalleryError::InvalidKey(_))),
                "{} was accepted",
                key
            );
        }
    }

    #[test]
    fn dots_inside_a_segment_allowed() {
        let key = StorageKey::derive(Utc.timestamp_millis_opt(1).unwrap(), "..hidden..png");

        assert_eq!(key.segments().unwrap(), vec!["public", "1-..hidden..png"]);
    }

    #[test]
    fn record_has_exactly_four_fields() {
        let record = GalleryRecord::new("T", "D", "I");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"title": "T", "description": "D", "icon": "I", "badge_text": "New"})
        );
    }

    #[test]
    fn uploaded_object_without_id() {
        let object: UploadedObject =
            serde_json::from_str(r#"{"Key":"gallery-images/public/1-a.png"}"#).unwrap();

        assert_eq!(object.key, "gallery-images/public/1-a.png");
        assert_eq!(object.id, None);
    }
}
