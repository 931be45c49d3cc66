//! Reply presentation settings

use std::path::Path;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Environment prefix read by [`TriageConfig::load`]
pub const ENV_PREFIX: &str = "SUPPORT_TRIAGE";

/// Default signature line appended to every reply
pub const DEFAULT_SIGNATURE: &str = "— Support Bot";

/// Presentation settings for composed replies.
///
/// The defaults reproduce the stock reply format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Signature line placed after the reply body
    pub signature: String,
    /// Append the "(Interpretation: ...)" footer
    pub include_interpretation: bool,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            signature: DEFAULT_SIGNATURE.to_string(),
            include_interpretation: true,
        }
    }
}

impl TriageConfig {
    /// Load settings from an optional config file, overridden by
    /// `SUPPORT_TRIAGE_*` environment variables.
    ///
    /// A missing file is not an error; unset keys keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "loading triage config file");
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
