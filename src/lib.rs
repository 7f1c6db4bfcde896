pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
pub mod render;
pub mod scrapers;
pub mod server;
pub mod utils;
