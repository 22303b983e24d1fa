use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

use vibe_domain::features::FeatureError;

/// Prefix for environment overrides consumed by [`load_config`]
/// (e.g., `VIBE__SERVER__PORT`, `VIBE__FEATURES__AUTH`).
pub const ENV_PREFIX: &str = "VIBE";

/// Configuration errors are fatal at startup: the process refuses to serve
/// traffic over a malformed or inconsistent configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid feature override {name}={value}: expected \"true\" or \"false\"")]
    InvalidOverride { name: String, value: String },
    #[error(transparent)]
    Features(#[from] FeatureError),
}

/// A reusable configuration loader combining file-based settings with
/// environment overrides.
///
/// Layered strategy, later sources winning per field:
/// 1. **Struct defaults** via `#[serde(default)]` on the target type.
/// 2. **Base file**: `server.{toml,json,...}` in the working directory (or
///    the explicit `path`). The default file is optional, since a deployment may
///    run on defaults plus environment alone; an explicitly requested file
///    must exist.
/// 3. **Environment overrides** prefixed with `VIBE__`, nested fields
///    separated by double underscores (e.g., `VIBE__SERVICES__AUTH_URL`).
///
/// # Errors
/// Returns [`ConfigError::Load`] if an explicitly given file is missing, a
/// source is malformed, or deserialization into `T` fails.
pub fn load_config<T, P>(path: Option<P>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from("server"), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
