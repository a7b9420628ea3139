pub mod health;
pub mod sentiment;
