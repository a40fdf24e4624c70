use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::plugin_directory::directory_for_plugin_type;

/// A Moodle plugin identifier of the form `<type>_<name>`, e.g. `block_xp`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FrankenstyleName {
    pub plugin_type: String,
    pub plugin_name: String,
}

impl FrankenstyleName {
    /// Splits on the first underscore only; the name part may itself contain
    /// underscores (e.g. `assignfeedback_editpdf`).
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let (plugin_type, plugin_name) = raw
            .split_once('_')
            .ok_or_else(|| LookupError::InvalidFrankenstyleName(raw.to_string()))?;

        let plugin_type = plugin_type.trim();
        if directory_for_plugin_type(plugin_type).is_none() {
            return Err(LookupError::InvalidPluginType(plugin_type.to_string()));
        }

        let plugin_name = plugin_name.trim();
        if plugin_name.is_empty() {
            return Err(LookupError::InvalidPluginName);
        }

        Ok(Self {
            plugin_type: plugin_type.to_string(),
            plugin_name: plugin_name.to_string(),
        })
    }
}

impl fmt::Display for FrankenstyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.plugin_type, self.plugin_name)
    }
}
