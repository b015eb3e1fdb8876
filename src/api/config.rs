use clap::Parser;

use crate::utils::app_config::DEFAULT_POOL_SIZE;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "petcare-tracker",
    about = "Pet-care expense and vaccination tracker API"
)]
pub struct ApiConfig {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Maximum number of pooled database connections
    #[arg(long, env = "DB_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub db_pool_size: u32,
}

impl ApiConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
