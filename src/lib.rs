//! Lookup utilities for Moodle deployment automation: the compatible PHP
//! version for a Moodle release, the installation directory for a plugin,
//! and the stable Git branch for a `major.minor` version.

mod error;
mod models;
mod php_version;
mod plugin_directory;
mod stable_branch;

pub use error::LookupError;
pub use models::FrankenstyleName;
pub use php_version::{php_version, supported_moodle_versions};
pub use plugin_directory::{directory_for_plugin_type, plugin_directory};
pub use stable_branch::stable_branch;
