pub mod app;
pub mod auth;
pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod params;
pub mod scores;
pub mod sessions;
pub mod state;
pub mod store;
pub mod users;
