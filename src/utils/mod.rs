//! The `utils` module provides shared definitions used across `topicast`:
//! the error types and the logging bootstrap.

pub mod error;
pub mod logging;

#[cfg(test)]
mod tests {
    use super::logging;
    use crate::config::{LoggingSettings, Settings};

    #[test]
    fn logging_init_accepts_levels() {
        // Should not panic
        logging::init(&Settings::default().logging);
        for level in ["debug", "WARN", " error ", "nonsense", ""] {
            logging::init(&LoggingSettings {
                level: level.to_string(),
            });
        }
    }
}
