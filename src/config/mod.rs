//! Configuration module for gutenprep
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every field has a default, so an empty file (or no
//! file at all) yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use gutenprep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("gutenprep.toml")).unwrap();
//! println!("Server will listen on port {}", config.server.port);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalysisConfig, Config, FetchConfig, ServerConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
