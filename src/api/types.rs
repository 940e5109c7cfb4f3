use serde::{Deserialize, Serialize};

use crate::models::planet::Planet;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanetDetailsResponse {
    pub message: String,
    pub planet_details: Planet,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
}

/// A body field as sent by the client. Form bodies only carry text, JSON
/// bodies may carry numbers directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<FieldValue>,
    pub first_name: Option<FieldValue>,
    pub last_name: Option<FieldValue>,
    pub password: Option<FieldValue>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<FieldValue>,
    pub password: Option<FieldValue>,
}

/// Body of `/add_planet` and `/update_planet`; `planet_id` is only read by the latter.
#[derive(Debug, Deserialize)]
pub struct PlanetRequest {
    pub planet_id: Option<FieldValue>,
    pub planet_name: Option<FieldValue>,
    pub planet_type: Option<FieldValue>,
    pub home_star: Option<FieldValue>,
    pub mass: Option<FieldValue>,
    pub radius: Option<FieldValue>,
    pub distance: Option<FieldValue>,
}
