use std::str::FromStr;

use tracing::Level;

use crate::config::LoggingSettings;

/// Installs the fmt subscriber at the level named in `settings`.
///
/// Unknown level names fall back to `info` and are reported once the
/// subscriber is up. Only the first call installs anything; later calls
/// (tests, the CLI error path) are no-ops.
pub fn init(settings: &LoggingSettings) {
    let parsed = Level::from_str(settings.level.trim()).ok();
    let level = parsed.unwrap_or(Level::INFO);

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed && parsed.is_none() {
        tracing::warn!("Unknown log level {:?}, using info", settings.level);
    }
}
