pub mod browser;
pub mod console;
pub mod fs;
pub mod signal;
