pub mod auth;
pub mod cli;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod router;
pub mod schema;
pub mod types;

pub use error::ApiError;
pub use router::{app, app_with};
