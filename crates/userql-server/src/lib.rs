pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod routes;
pub mod store;

pub use config::Config;
pub use routes::{create_router, AppState};
pub use store::{SharedStore, UserStore};
