pub mod cli;
pub mod config;
pub mod constants;
pub mod evaluation;
pub mod geom;
pub mod models;
pub mod utils;
