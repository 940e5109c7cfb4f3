pub mod auth_service;
pub use auth_service::{AuthError, AuthService, LoginResult};

pub mod auth_service_impl;
pub use auth_service_impl::SeaOrmAuthService;

pub mod planet_service;
pub use planet_service::{PlanetError, PlanetService};

pub mod planet_service_impl;
pub use planet_service_impl::SeaOrmPlanetService;

pub mod token;
pub use token::{Claims, TokenIssuer};
