use crate::config::SecurityConfig;
use crate::models::planet::{Planet, PlanetInput, seed_planets};
use crate::models::user::{NewUser, User, seed_user};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

/// What `seed` actually inserted; rows already present are skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub planets_added: usize,
    pub users_added: usize,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    /// Connect and bring the schema up to date.
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        let store = Self::connect(db_url, max_connections, min_connections).await?;
        store.create_schema().await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(store)
    }

    /// Connect without touching the schema. Used by the admin commands.
    pub async fn connect(db_url: &str, max_connections: u32, min_connections: u32) -> Result<Self> {
        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        Ok(Self { conn })
    }

    pub async fn create_schema(&self) -> Result<()> {
        migrator::Migrator::up(&self.conn, None).await?;
        Ok(())
    }

    pub async fn drop_schema(&self) -> Result<()> {
        migrator::Migrator::down(&self.conn, None).await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn planet_repo(&self) -> repositories::planet::PlanetRepository {
        repositories::planet::PlanetRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Planets
    // ========================================================================

    pub async fn list_planets(&self) -> Result<Vec<Planet>> {
        self.planet_repo().list_all().await
    }

    pub async fn get_planet(&self, id: i32) -> Result<Option<Planet>> {
        self.planet_repo().get(id).await
    }

    pub async fn get_planet_by_name(&self, name: &str) -> Result<Option<Planet>> {
        self.planet_repo().get_by_name(name).await
    }

    pub async fn add_planet(&self, input: &PlanetInput) -> Result<i32> {
        self.planet_repo().add(input).await
    }

    pub async fn replace_planet(&self, id: i32, input: &PlanetInput) -> Result<bool> {
        self.planet_repo().replace(id, input).await
    }

    pub async fn remove_planet(&self, id: i32) -> Result<bool> {
        self.planet_repo().remove(id).await
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.user_repo().get_by_email(email).await
    }

    pub async fn create_user(
        &self,
        user: &NewUser,
        config: &SecurityConfig,
    ) -> Result<Option<User>> {
        self.user_repo().create(user, config).await
    }

    pub async fn verify_user_password(&self, email: &str, password: &str) -> Result<Option<User>> {
        self.user_repo().verify_password(email, password).await
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    /// Insert the sample planets and user. Safe to run twice.
    pub async fn seed(&self, config: &SecurityConfig) -> Result<SeedSummary> {
        let mut summary = SeedSummary::default();

        for planet in seed_planets() {
            if self.get_planet_by_name(&planet.planet_name).await?.is_some() {
                continue;
            }
            self.add_planet(&planet).await?;
            summary.planets_added += 1;
        }

        let user = seed_user();
        if self.get_user_by_email(&user.email).await?.is_none()
            && self.create_user(&user, config).await?.is_some()
        {
            summary.users_added += 1;
        }

        Ok(summary)
    }
}
