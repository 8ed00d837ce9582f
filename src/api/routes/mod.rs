pub mod auth;
pub mod health;
pub mod news;
pub mod scans;
