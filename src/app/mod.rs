pub mod case;
pub mod config;
pub mod listing;
pub mod logging;
pub mod suite;
