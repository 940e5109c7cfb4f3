use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
};
use std::sync::Arc;
use tracing::info;

use super::validation::{required_float, required_id, required_text};
use super::{ApiError, AppState, MessageResponse, Payload, PlanetDetailsResponse, PlanetRequest};
use crate::models::planet::{Planet, PlanetInput};
use crate::services::{Claims, PlanetError};

fn planet_input(payload: PlanetRequest) -> Result<PlanetInput, ApiError> {
    Ok(PlanetInput {
        planet_name: required_text("planet_name", payload.planet_name)?,
        planet_type: required_text("planet_type", payload.planet_type)?,
        home_star: required_text("home_star", payload.home_star)?,
        mass: required_float("mass", payload.mass)?,
        radius: required_float("radius", payload.radius)?,
        distance: required_float("distance", payload.distance)?,
    })
}

/// Maps an unknown id to the configured not-found response.
fn or_missing(state: &AppState, message: &str) -> impl FnOnce(PlanetError) -> ApiError {
    let strict = state.config().server.strict_not_found_status;
    let message = message.to_string();
    move |err| match err {
        PlanetError::NotFound(_) => ApiError::missing(message, strict),
        other => other.into(),
    }
}

/// GET /planets
pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = state.planet_service().list().await?;
    Ok(Json(planets))
}

/// GET /planet_details/{id}
pub async fn planet_details(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<PlanetDetailsResponse>, ApiError> {
    let Path(id) = id?;
    let planet = state
        .planet_service()
        .get(id)
        .await
        .map_err(or_missing(&state, "Planet does not exist"))?;

    Ok(Json(PlanetDetailsResponse {
        message: "planet found!".to_string(),
        planet_details: planet,
    }))
}

/// POST /add_planet
pub async fn add_planet(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Payload(payload): Payload<PlanetRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let input = planet_input(payload)?;
    let name = input.planet_name.clone();

    let id = state.planet_service().create(input).await?;
    info!("Planet {} ({}) added by {}", name, id, claims.sub);

    Ok(Json(MessageResponse::new("Planet added successfully")))
}

/// PUT /update_planet
pub async fn update_planet(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Payload(mut payload): Payload<PlanetRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = required_id("planet_id", payload.planet_id.take())?;
    let input = planet_input(payload)?;

    state
        .planet_service()
        .update(id, input)
        .await
        .map_err(or_missing(&state, "Could not find planet"))?;
    info!("Planet {} updated by {}", id, claims.sub);

    Ok(Json(MessageResponse::new("Planet updated successfully")))
}

/// DELETE /planet_details/{id}
pub async fn delete_planet(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state
        .planet_service()
        .delete(id)
        .await
        .map_err(or_missing(&state, "Could not find planet"))?;
    info!("Planet {} removed by {}", id, claims.sub);

    Ok(Json(MessageResponse::new("Planet removed successfully")))
}
