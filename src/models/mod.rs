pub mod planet;
pub mod user;
