//! numkit library — application logic for the numkit command-line tool.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
