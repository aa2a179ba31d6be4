use crate::{error::ConfigError, sink::Target};
use std::{fmt, str::FromStr};

/// Log severity. Ascending order is more verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Critical = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Critical,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
    ];

    /// Prefix written at the start of every line for this level.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Critical => "[CRITICAL] ",
            Level::Error => "[ERROR] ",
            Level::Warn => "[WARN] ",
            Level::Info => "[INFO] ",
            Level::Debug => "[DEBUG] ",
        }
    }

    /// Stream this level is written to.
    pub fn target(self) -> Target {
        match self {
            Level::Critical | Level::Error => Target::Stderr,
            Level::Warn | Level::Info | Level::Debug => Target::Stdout,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, ConfigError> {
        Level::ALL
            .get(value as usize)
            .copied()
            .ok_or(ConfigError::InvalidLevel(value))
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let name = s.trim();
        if let Ok(value) = name.parse::<u8>() {
            return Level::try_from(value);
        }

        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownLevelName(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn levels_ascend_in_verbosity() {
        assert!(Level::Critical < Level::Error);
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
    }

    #[test_case(0, Level::Critical)]
    #[test_case(1, Level::Error)]
    #[test_case(2, Level::Warn)]
    #[test_case(3, Level::Info)]
    #[test_case(4, Level::Debug)]
    fn numeric_encoding(value: u8, level: Level) {
        assert_eq!(Level::try_from(value), Ok(level));
        assert_eq!(u8::from(level), value);
    }

    #[test]
    fn conversion_error_is_config_error() {
        let result: Result<Level, ConfigError> = 9u8.try_into();
        assert_eq!(result, Err(ConfigError::InvalidLevel(9)));
    }

    #[test_case(5)]
    #[test_case(10)]
    #[test_case(u8::MAX)]
    fn out_of_range_is_rejected(value: u8) {
        assert_eq!(Level::try_from(value), Err(ConfigError::InvalidLevel(value)));
    }

    #[test_case(Level::Critical, Target::Stderr)]
    #[test_case(Level::Error, Target::Stderr)]
    #[test_case(Level::Warn, Target::Stdout)]
    #[test_case(Level::Info, Target::Stdout)]
    #[test_case(Level::Debug, Target::Stdout)]
    fn destination_split(level: Level, target: Target) {
        assert_eq!(level.target(), target);
    }

    #[test_case("warn", Level::Warn; "lower")]
    #[test_case("CRITICAL", Level::Critical; "upper")]
    #[test_case(" Debug ", Level::Debug; "padded")]
    #[test_case("1", Level::Error; "digit")]
    fn parses_names(input: &str, level: Level) {
        assert_eq!(input.parse::<Level>(), Ok(level));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "verbose".parse::<Level>(),
            Err(ConfigError::UnknownLevelName("verbose".to_string()))
        );
        assert_eq!("7".parse::<Level>(), Err(ConfigError::InvalidLevel(7)));
    }
}
