use anyhow::{Result, anyhow};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dotenvy::dotenv;

pub const DEFAULT_POOL_SIZE: u32 = 10;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pool: DbPool,
}

impl AppConfig {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Builds the pool from `DATABASE_URL` and the optional `DB_POOL_SIZE`.
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let database_url = std::env::var("DATABASE_URL").map_err(|_| {
            anyhow!("DATABASE_URL must be set in .env file or environment variables")
        })?;
        let pool_size = std::env::var("DB_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_POOL_SIZE);

        Self::connect(&database_url, pool_size)
    }

    pub fn connect(database_url: &str, pool_size: u32) -> Result<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        Ok(Self::new(pool))
    }
}
