//! Database administration command handlers

use crate::config::Config;
use crate::db::Store;

async fn connect(config: &Config) -> anyhow::Result<Store> {
    Store::connect(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
}

pub async fn cmd_db_create(config: &Config) -> anyhow::Result<()> {
    let store = connect(config).await?;
    store.create_schema().await?;

    println!("Database created successfully");
    Ok(())
}

pub async fn cmd_db_drop(config: &Config) -> anyhow::Result<()> {
    let store = connect(config).await?;
    store.drop_schema().await?;

    println!("Database dropped!");
    Ok(())
}

pub async fn cmd_db_seed(config: &Config) -> anyhow::Result<()> {
    let store = connect(config).await?;
    let summary = store.seed(&config.security).await?;

    if summary.planets_added == 0 && summary.users_added == 0 {
        println!("Database already seeded, nothing to add.");
        return Ok(());
    }

    println!(
        "Database seeded ({} planets, {} users)",
        summary.planets_added, summary.users_added
    );
    Ok(())
}
