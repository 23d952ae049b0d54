//! Interchange document for import/export

use serde::{Deserialize, Serialize};

use super::{Profile, Variable};

/// The portable form of one profile's variables.
///
/// Field names are the wire contract:
///
/// ```json
/// {
///   "profile_name": ".zshrc",
///   "environment_variables": [ { "key": "EDITOR", "value": "nvim" } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub profile_name: String,
    #[serde(rename = "environment_variables")]
    pub variables: Vec<Variable>,
}

impl ProfileDocument {
    pub fn new(profile_name: impl Into<String>, variables: Vec<Variable>) -> Self {
        Self {
            profile_name: profile_name.into(),
            variables,
        }
    }

    /// Default filename suggested when exporting this document
    pub fn default_filename(&self) -> String {
        format!("{}_env_vars.json", self.profile_name)
    }
}

impl From<&Profile> for ProfileDocument {
    fn from(profile: &Profile) -> Self {
        Self::new(profile.name.clone(), profile.variables.clone())
    }
}
