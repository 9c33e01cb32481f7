// File: ./src/client/mod.rs
pub mod core;

// Use crate path to be safe, or relative
pub use crate::client::core::{HttpSource, LocalSource, RecordSource};
