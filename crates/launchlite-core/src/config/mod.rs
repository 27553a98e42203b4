//! Unified configuration layer.
//!
//! All environment variable reads go through this module; business code
//! accesses structured config instead of calling `std::env::var` directly.
//!
//! - `loader`: env_or, env_optional, env_bool helpers and `.env` loading
//! - `schema`: BootstrapConfig, ObservabilityConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, load_dotenv};
pub use loader::{remove_env_var, set_env_var};
pub use schema::{BootstrapConfig, ObservabilityConfig};
