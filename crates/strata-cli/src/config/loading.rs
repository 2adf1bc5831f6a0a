use crate::cli::SourceArgs;
use crate::config::{CONFIG_FILE_NAME, StrataConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Values given on the command line; unset ones do not override.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_hidden: Option<bool>,
}

impl StrataConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// `--exclude` names are appended to the configured list rather than
    /// replacing it.
    pub fn load(args: &SourceArgs) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.clone()).into()),
            Some(path) => Some(path.clone()),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            tracing::debug!("Loading config from {}", path.display());
            figment = figment.merge(Json::file(path));
        }

        // STRATA_ROOT, STRATA_MAX_FILE_SIZE, STRATA_EXCLUDE="[a, b]", ...
        figment = figment.merge(Env::prefixed("STRATA_"));

        figment = figment.merge(Serialized::defaults(CliOverrides {
            root: args.root.clone(),
            include_hidden: args.include_hidden.then_some(true),
        }));

        let mut config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        for name in &args.exclude {
            if !config.exclude.contains(name) {
                config.exclude.push(name.clone());
            }
        }

        config.validate()?;
        Ok(config)
    }
}
