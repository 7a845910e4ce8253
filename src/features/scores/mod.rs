//! Scoring: a team plays a question, the stored points of its answers are
//! summed into a score and the question is retired.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ScoreService;
