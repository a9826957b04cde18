pub mod error;
pub mod validation;
pub mod model;
pub mod store;
pub mod queries;
pub mod db;
pub mod config;
pub mod cli;
