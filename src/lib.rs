pub mod config;
pub mod db;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
