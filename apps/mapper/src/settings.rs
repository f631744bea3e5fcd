use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = "bitsmap.toml";
const ENV_PREFIX: &str = "BITSD";

/// Configuration loading failure.
#[bitsd_derive::bitsd_error]
pub(crate) enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layers an optional TOML file with `BITSD__`-prefixed environment overrides.
///
/// An explicitly given `path` must exist; the default `bitsmap.toml` is optional.
/// Nested keys use double underscores: `BITSD__LOGGING__LEVEL=debug` sets `logging.level`.
///
/// # Errors
/// Fails when an explicit file is missing, a source cannot be parsed, or the
/// merged settings do not match `T`.
pub(crate) fn load_config<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) =
        path.map_or_else(|| (Path::new(DEFAULT_CONFIG_FILE), false), |p| (p, true));

    debug!(path = %file.display(), required, "loading configuration");

    Config::builder()
        .add_source(File::from(file).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
