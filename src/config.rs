use crate::{error::ConfigError, level::Level};

/// Caller-supplied logger configuration.
///
/// `level` holds the raw numeric severity (0 = Critical ... 4 = Debug) and is
/// validated when the logger is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub enabled: bool,
    pub level: u8,
}

/// Returns `{ enabled: true, level: Info }`.
pub fn default_config() -> Config {
    Config {
        enabled: true,
        level: Level::Info.into(),
    }
}

impl Config {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<Settings, ConfigError> {
        Ok(Settings {
            enabled: self.enabled,
            threshold: Level::try_from(self.level)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

/// Validated configuration held by a logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Settings {
    pub enabled: bool,
    pub threshold: Level,
}

impl Settings {
    /// True when a message at `level` passes the enabled flag and threshold.
    pub fn accepts(&self, level: Level) -> bool {
        self.enabled && u8::from(self.threshold) >= u8::from(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_is_enabled_at_info() {
        let config = default_config();
        assert!(config.enabled);
        assert_eq!(config.level, 3);
        assert_eq!(Config::default(), config);
    }

    #[test]
    fn overrides_apply() {
        let config = default_config()
            .with_enabled(false)
            .with_level(Level::Debug);
        assert_eq!(
            config,
            Config {
                enabled: false,
                level: 4
            }
        );
    }

    #[test]
    fn invalid_level_fails_validation() {
        let config = Config {
            enabled: true,
            level: 10,
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidLevel(10)));
    }

    #[test_case(Level::Debug, Level::Debug, true)]
    #[test_case(Level::Debug, Level::Critical, true)]
    #[test_case(Level::Warn, Level::Error, true)]
    #[test_case(Level::Warn, Level::Warn, true)]
    #[test_case(Level::Warn, Level::Info, false)]
    #[test_case(Level::Critical, Level::Error, false)]
    #[test_case(Level::Critical, Level::Critical, true)]
    fn threshold_comparison(threshold: Level, level: Level, expected: bool) {
        let settings = Settings {
            enabled: true,
            threshold,
        };
        assert_eq!(settings.accepts(level), expected);
    }

    #[test]
    fn disabled_accepts_nothing() {
        let settings = Settings {
            enabled: false,
            threshold: Level::Debug,
        };
        assert!(Level::ALL.into_iter().all(|level| !settings.accepts(level)));
    }
}
