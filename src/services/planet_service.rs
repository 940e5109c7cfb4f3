//! Domain service for planet records.

use thiserror::Error;

use crate::models::planet::{Planet, PlanetInput};

#[derive(Debug, Error)]
pub enum PlanetError {
    #[error("Planet name already exists")]
    NameTaken,

    #[error("Planet {0} not found")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for PlanetError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait PlanetService: Send + Sync {
    async fn list(&self) -> Result<Vec<Planet>, PlanetError>;

    async fn get(&self, id: i32) -> Result<Planet, PlanetError>;

    /// # Errors
    ///
    /// Returns [`PlanetError::NameTaken`] if a planet with the same name exists.
    async fn create(&self, input: PlanetInput) -> Result<i32, PlanetError>;

    /// Replaces every field of an existing planet.
    async fn update(&self, id: i32, input: PlanetInput) -> Result<(), PlanetError>;

    async fn delete(&self, id: i32) -> Result<(), PlanetError>;
}
