//! Configuration file loading for subtype-consensus
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SUBTYPE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./subtype.toml` or `./.subtype.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/subtype-consensus/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_MODELS_DIR, FileConfig, FileEnsembleConfig, FileModelSource, FileOutputConfig,
};
pub use loader::ConfigLoader;
