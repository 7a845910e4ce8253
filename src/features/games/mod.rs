//! Game bootstrap: create a game with a fresh copy of the question bank,
//! switch it on or off, and fetch the latest one.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::GameService;
