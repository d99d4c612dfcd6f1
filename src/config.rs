use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_NAME: &str = "Atrea";

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

/// Platform configuration for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    pub host: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl AdapterConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            name: default_name(),
            username: None,
            password: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Parse and validate a JSON config object.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Host must be set; username and password come as a pair or not at all.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::InvalidConfig("host is required".to_string()));
        }
        match (&self.username, &self.password) {
            (Some(_), None) => Err(Error::InvalidConfig(
                "username given without password".to_string(),
            )),
            (None, Some(_)) => Err(Error::InvalidConfig(
                "password given without username".to_string(),
            )),
            _ => Ok(()),
        }
    }

    pub(crate) fn credentials(&self) -> Option<(String, String)> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Some((u.clone(), p.clone())),
            _ => None,
        }
    }
}
