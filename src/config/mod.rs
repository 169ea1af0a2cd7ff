//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize, defaults for missing sections)
//!     → command-line flags / environment override individual fields
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable for the rest of the run)
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{finish, load_or_default, ConfigError};
pub use schema::{
    ClientConfig, EverpayConfig, GenesisConfig, ObservabilityConfig, RouterConfig, TokenConfig,
};
pub use validation::{validate_config, ValidationError};
