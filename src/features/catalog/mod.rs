//! Question catalog: the static question bank and the seeder that copies it
//! into the store for every new game.
//!
//! Categories are created once and reused; questions and answers are created
//! fresh for each game.

pub mod dtos;
pub mod models;
pub mod services;

pub use models::QuestionBank;
pub use services::CatalogSeeder;
