pub mod app;
pub mod auth;
pub mod depot;
pub mod error;
pub mod middleware;
