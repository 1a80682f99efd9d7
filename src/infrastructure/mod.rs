//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where configuration is read from and where runtime data (trace
//! exports) is written.

pub mod paths;

pub use paths::{config_file, expand_tilde, get_data_dir};
