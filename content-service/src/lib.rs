pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod resources;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
