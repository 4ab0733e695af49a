//! Run configuration for the Trello gate.
//!
//! Configuration comes from two places: an optional YAML file (by default
//! `trello.yml` in the working directory) and explicit overrides supplied by
//! the host, typically from command-line options. Overrides win. A missing
//! file is not an error.
//!
//! ```yaml
//! key: 0123abcd
//! token: 4567efgh
//! completed:
//!   - Done
//!   - Archived
//! ```

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::{ConfigFile, ConfigOverrides, DEFAULT_CONFIG_FILE, TrelloConfig, load};
