//! Configuration file parsing for icongen
//!
//! Supports:
//! - `.icongen/config.toml` - Project settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings};
pub use types::*;
