use crate::config::StrataConfig;
use crate::error::{ConfigError, Result};

impl StrataConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.max_file_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_file_size".to_string(),
                value: "0".to_string(),
                hint: "Must be greater than zero".to_string(),
            }
            .into());
        }

        if let Some(bad) = self
            .exclude
            .iter()
            .find(|name| name.trim().is_empty() || name.contains(['/', '\\']))
        {
            return Err(ConfigError::InvalidValue {
                field: "exclude".to_string(),
                value: format!("{bad:?}"),
                hint: "Entries are single directory names, e.g. \"migrations\"".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
