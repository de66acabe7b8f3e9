use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::db::{create_pool, revert_latest_migration, run_migrations};

pub async fn run(config: &Config, revert: bool) -> Result<()> {
    let pool = create_pool(&config.database_url).await?;

    if revert {
        revert_latest_migration(&pool).await?;
        println!("{}", "Latest migration reverted".yellow().bold());
    } else {
        run_migrations(&pool).await?;
        println!("{}", "Migrations applied successfully".green().bold());
    }
    Ok(())
}
