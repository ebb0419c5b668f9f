//! Campaign tracker backend: CRUD over campaigns, characters, sessions and monsters, plus dice rolling.

pub mod config;
pub mod dice;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use response::{created, deleted, ok};
pub use routes::{app, common_routes, resource_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, Store};
