//! HTTP inbound adapter exposing the movie catalogue REST endpoints.

pub mod error;
pub mod health;
pub mod movies;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
