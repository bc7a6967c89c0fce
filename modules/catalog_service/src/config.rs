//! Configuration for catalog service module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Catalog service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed file replacing the built-in defaults used by the reset routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// Include underlying storage error text in 500 responses (development only)
    #[serde(default)]
    pub expose_error_details: bool,
}
