//! service-core: shared configuration, errors, middleware and tracing setup
//! for the content backend.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
