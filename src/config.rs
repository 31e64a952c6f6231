use std::env;

use percent_encoding::NON_ALPHANUMERIC;

#[derive(Clone, Debug)]
pub struct Config {
    pub storage_type: String,
    pub storage_base_path: String,
    pub database_type: String,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub supabase_return_rows: bool,
    pub db_connection_pool_size: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_database: String,
    pub db_schema: String,
    pub trace_reporting_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let storage_type = env::var("STORAGE_TYPE").unwrap_or("supabase".to_owned());
        let storage_base_path =
            env::var("STORAGE_BASE_PATH").unwrap_or("/tmp/gallery-store".to_owned());
        let database_type = env::var("DATABASE_TYPE").unwrap_or("supabase".to_owned());
        let supabase_url = env::var("SUPABASE_URL").ok();
        let supabase_key = env::var("SUPABASE_KEY").ok();
        let supabase_return_rows: bool = env::var("SUPABASE_RETURN_ROWS")
            .unwrap_or("false".to_owned())
            .parse()
            .expect("SUPABASE_RETURN_ROWS could not be parsed into a bool");
        let db_connection_pool_size = env::var("DB_CONNECTION_POOL_SIZE")
            .unwrap_or("10".to_owned())
            .parse()
            .expect("DB_CONNECTION_POOL_SIZE could not be parsed into a u16");
        let db_host = env::var("DB_HOST").unwrap_or("localhost".to_owned());
        let db_port = env::var("DB_PORT")
            .unwrap_or("5432".to_owned())
            .parse()
            .expect("DB_PORT could not be parsed into a u16");
        let db_user = env::var("DB_USER").unwrap_or("postgres".to_owned());
        let db_password = env::var("DB_PASS").unwrap_or("postgres".to_owned());
        let db_database = env::var("DB_NAME").unwrap_or("postgres".to_owned());
        let db_schema = env::var("DB_SCHEMA").unwrap_or("public".to_owned());
        let trace_reporting_enabled: bool = env::var("TRACE_REPORTING_ENABLED")
            .unwrap_or("false".to_owned())
            .parse()
            .expect("TRACE_REPORTING_ENABLED could not be parsed into a bool");

        Self {
            storage_type,
            storage_base_path,
            database_type,
            supabase_url,
            supabase_key,
            supabase_return_rows,
            db_connection_pool_size,
            db_host,
            db_port,
            db_user,
            db_password,
            db_database,
            db_schema,
            trace_reporting_enabled,
        }
    }

    pub fn db_connection_string(&self) -> String {
        let password =
            percent_encoding::percent_encode(self.db_password.as_bytes(), NON_ALPHANUMERIC);

        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, password, self.db_host, self.db_port, self.db_database,
        )
    }
}
