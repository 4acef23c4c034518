pub mod config;
pub mod proposal;
pub mod types;
