use gallery_store::config::Config;

pub fn test_config(db_port: u16) -> Config {
    Config {
        storage_type: "file_system".to_owned(),
        storage_base_path: std::env::temp_dir().to_string_lossy().to_string(),
        database_type: "postgres".to_owned(),
        supabase_url: None,
        supabase_key: None,
        supabase_return_rows: false,
        db_connection_pool_size: 1,
        db_host: "localhost".to_owned(),
        db_port,
        db_user: "postgres".to_owned(),
        db_password: "postgres".to_owned(),
        db_database: "postgres".to_owned(),
        db_schema: "public".to_owned(),
        trace_reporting_enabled: false,
    }
}
