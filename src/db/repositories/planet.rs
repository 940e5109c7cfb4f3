use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::info;

use crate::entities::{planets, prelude::*};
use crate::models::planet::{Planet, PlanetInput};

/// Repository for planet operations
pub struct PlanetRepository {
    conn: DatabaseConnection,
}

impl PlanetRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: planets::Model) -> Planet {
        Planet {
            planet_id: m.planet_id,
            planet_name: m.planet_name,
            planet_type: m.planet_type,
            home_star: m.home_star,
            mass: m.mass,
            radius: m.radius,
            distance: m.distance,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Planet>> {
        let rows = Planets::find()
            .all(&self.conn)
            .await
            .context("Failed to list planets")?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Planet>> {
        let row = Planets::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query planet by ID")?;

        Ok(row.map(Self::map_model))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Planet>> {
        let row = Planets::find()
            .filter(planets::Column::PlanetName.eq(name))
            .one(&self.conn)
            .await
            .context("Failed to query planet by name")?;

        Ok(row.map(Self::map_model))
    }

    pub async fn add(&self, input: &PlanetInput) -> Result<i32> {
        let active = planets::ActiveModel {
            planet_name: Set(input.planet_name.clone()),
            planet_type: Set(input.planet_type.clone()),
            home_star: Set(input.home_star.clone()),
            mass: Set(input.mass),
            radius: Set(input.radius),
            distance: Set(input.distance),
            ..Default::default()
        };

        let res = Planets::insert(active)
            .exec(&self.conn)
            .await
            .context("Failed to insert planet")?;

        info!("Added planet {} (id {})", input.planet_name, res.last_insert_id);
        Ok(res.last_insert_id)
    }

    /// Overwrite every column of an existing row. Returns `false` if the id is unknown.
    pub async fn replace(&self, id: i32, input: &PlanetInput) -> Result<bool> {
        let Some(existing) = Planets::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query planet for update")?
        else {
            return Ok(false);
        };

        let mut active: planets::ActiveModel = existing.into();
        active.planet_name = Set(input.planet_name.clone());
        active.planet_type = Set(input.planet_type.clone());
        active.home_star = Set(input.home_star.clone());
        active.mass = Set(input.mass);
        active.radius = Set(input.radius);
        active.distance = Set(input.distance);
        active
            .update(&self.conn)
            .await
            .context("Failed to update planet")?;

        info!("Updated planet {}", id);
        Ok(true)
    }

    pub async fn remove(&self, id: i32) -> Result<bool> {
        let result = Planets::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete planet")?;

        if result.rows_affected > 0 {
            info!("Removed planet {}", id);
        }
        Ok(result.rows_affected > 0)
    }
}
