use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub planet_id: i32,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

/// Every writable planet field; used for both insert and full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetInput {
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl PlanetInput {
    #[must_use]
    pub fn new(
        planet_name: &str,
        planet_type: &str,
        home_star: &str,
        mass: f64,
        radius: f64,
        distance: f64,
    ) -> Self {
        Self {
            planet_name: planet_name.to_string(),
            planet_type: planet_type.to_string(),
            home_star: home_star.to_string(),
            mass,
            radius,
            distance,
        }
    }
}

/// Planets written by `db-seed`.
#[must_use]
pub fn seed_planets() -> Vec<PlanetInput> {
    vec![
        PlanetInput::new("Mercury", "Class A", "Sol", 3.258e23, 1516.0, 35.98e6),
        PlanetInput::new("Venus", "Class E", "Sol", 4.867e24, 3760.0, 67.24e6),
        PlanetInput::new("Earth", "Class K", "Sol", 5.972e24, 3959.0, 92.96e6),
    ]
}
