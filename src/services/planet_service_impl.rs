//! `SeaORM` implementation of the `PlanetService` trait.

use crate::db::Store;
use crate::models::planet::{Planet, PlanetInput};
use crate::services::planet_service::{PlanetError, PlanetService};
use async_trait::async_trait;

pub struct SeaOrmPlanetService {
    store: Store,
}

impl SeaOrmPlanetService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlanetService for SeaOrmPlanetService {
    async fn list(&self) -> Result<Vec<Planet>, PlanetError> {
        Ok(self.store.list_planets().await?)
    }

    async fn get(&self, id: i32) -> Result<Planet, PlanetError> {
        self.store
            .get_planet(id)
            .await?
            .ok_or(PlanetError::NotFound(id))
    }

    async fn create(&self, input: PlanetInput) -> Result<i32, PlanetError> {
        // Not atomic: two concurrent creates with one name can both pass.
        if self
            .store
            .get_planet_by_name(&input.planet_name)
            .await?
            .is_some()
        {
            return Err(PlanetError::NameTaken);
        }

        Ok(self.store.add_planet(&input).await?)
    }

    async fn update(&self, id: i32, input: PlanetInput) -> Result<(), PlanetError> {
        if self.store.replace_planet(id, &input).await? {
            Ok(())
        } else {
            Err(PlanetError::NotFound(id))
        }
    }

    async fn delete(&self, id: i32) -> Result<(), PlanetError> {
        if self.store.remove_planet(id).await? {
            Ok(())
        } else {
            Err(PlanetError::NotFound(id))
        }
    }
}
