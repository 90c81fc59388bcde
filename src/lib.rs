pub mod config;
pub mod cors;
pub mod db;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;
