use anyhow::Result;
use diesel::PgConnection;

use crate::utils::app_config::AppConfig;

pub trait ActionProcessor<Config, Output> {
    async fn process(
        &self,
        app_config: &mut AppConfig,
        local_config: &mut Config,
        conn: Option<&mut PgConnection>,
    ) -> Result<Output>;
}
