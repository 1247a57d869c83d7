pub mod config;
pub mod error;
pub mod market;
pub mod writing;
