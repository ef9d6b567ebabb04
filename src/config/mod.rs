mod settings;

use config::{Config, ConfigError, Environment, File};

pub use settings::{
    BrokerSettings, LoggingSettings, PartialBrokerSettings, PartialLoggingSettings,
    PartialServerSettings, PartialSettings, ServerSettings, Settings,
};

/// Prefix of the environment variables read by [`load_config`].
pub const ENV_PREFIX: &str = "TOPICAST";

/// Loads the configuration from `config/default` and `TOPICAST_*`
/// environment variables, merged over the default values.
///
/// Nested keys use a double underscore: `TOPICAST_SERVER__PORT=9000`.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from("config/default")
}

/// Same as [`load_config`] with an explicit file stem (the extension picks
/// the format). The file is optional.
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(partial.merge(Settings::default()))
}

#[cfg(test)]
mod tests;
