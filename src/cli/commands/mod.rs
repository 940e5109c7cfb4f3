mod db;

pub use db::{cmd_db_create, cmd_db_drop, cmd_db_seed};
