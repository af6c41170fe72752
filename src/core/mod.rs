pub mod catalog;
pub mod config;
pub mod download;
pub mod progress;
