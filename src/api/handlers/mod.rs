// src/api/handlers/mod.rs
mod calculate;
mod health;

pub use calculate::calculate;
pub use health::ping;
