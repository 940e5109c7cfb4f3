pub use super::planets::Entity as Planets;
pub use super::users::Entity as Users;
