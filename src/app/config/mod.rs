//! Environment- and file-backed configuration loading.
//!
//! Pure schema parsing and validation live in `domain::configuration`.

mod load_config;

pub use load_config::{ConfigOverrides, load_client_config};
