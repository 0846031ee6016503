//! Utility functions

pub mod encoding;
pub mod paths;

pub use encoding::decode_text;
pub use paths::{dedupe_paths, user_config_dir};
