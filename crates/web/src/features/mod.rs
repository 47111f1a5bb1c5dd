pub mod health;
pub mod registration;
