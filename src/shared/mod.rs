pub mod constants;
pub mod health;
pub mod test_helpers;
pub mod types;
pub mod validation;
