mod file_system;
mod storage;
mod supabase;

// forwarding declarations
pub use file_system::FileSystem;
pub use storage::Storage;
pub use supabase::SupabaseStorage;
