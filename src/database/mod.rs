mod database;
mod postgres;
mod supabase;

// forwarding declarations
pub use database::Database;
pub use postgres::Postgres;
pub use supabase::SupabaseDatabase;
