// storage
pub const GALLERY_BUCKET: &str = "gallery-images";
pub const KEY_PREFIX: &str = "public/";
pub const KEY_SEPARATOR: &str = "-";

// database
pub const GALLERY_TABLE: &str = "galleries";
pub const DEFAULT_BADGE_TEXT: &str = "New";

// supabase http api
pub const STORAGE_API_PATH: &str = "storage/v1/object";
pub const REST_API_PATH: &str = "rest/v1";
pub const API_KEY_HEADER: &str = "apikey";
pub const UPSERT_HEADER: &str = "x-upsert";
pub const PREFER_HEADER: &str = "Prefer";
pub const RETURN_MINIMAL: &str = "return=minimal";
pub const RETURN_REPRESENTATION: &str = "return=representation";
