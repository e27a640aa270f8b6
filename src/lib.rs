pub mod config;
pub mod logging;
pub mod notes;
pub mod version;
