//! Selene Download Manager Library
//!
//! Core functionality behind the `selene-dl` interactive downloader: the file
//! catalog, the progress-tracked fetch and the menu actions.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
