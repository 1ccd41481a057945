pub mod dataset;
pub mod error;
pub mod matcher;
pub mod ports;
pub mod slot;
