pub mod backend;
pub mod config;
pub mod consts;
pub mod database;
pub mod db;
pub mod domain;
pub mod gallery;
pub mod storage;
pub mod supabase;
pub mod trace;
pub mod types;

pub use backend::Backend;
pub use gallery::{add_gallery, upload_image};
