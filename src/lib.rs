//! Leveled logging over stdout and stderr.
//!
//! Every line is prefixed with its level tag and a local timestamp. Debug, Info
//! and Warn go to stdout; Error and Critical go to stderr. A single observer can
//! be registered to receive the raw format string and arguments of each accepted
//! call.
//!
//! ```
//! use tierlog::{Level, Logger, create, default_config, vargs};
//!
//! let logger = create(Some(default_config().with_level(Level::Warn))).unwrap();
//! logger.on_log(|level, format, args| assert_eq!((level, format, args.len()), (Level::Error, "x=%d", 1)));
//!
//! logger.error("x=%d", &vargs![5]);
//! logger.debug("y", &[]);
//! ```

mod clock;
pub use clock::{Clock, SystemClock, TIMESTAMP_FORMAT};

mod config;
pub use config::{Config, default_config};

mod error;
pub use error::ConfigError;

mod format;
pub use format::sprintf;

mod level;
pub use level::Level;

mod logger;
pub use logger::{LevelLogger, Logger, Observer, create};

mod sink;
pub use sink::{Sink, StdSink, Target};

mod value;
pub use value::Value;

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($method:ident, $logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::$method(&$logger, $format, &$crate::vargs![$($arg),*])
    };
}

/// `critical!(logger, "x=%d", 5)`
#[macro_export]
macro_rules! critical {
    ($($tt:tt)+) => { $crate::__log!(critical, $($tt)+) };
}

/// `error!(logger, "x=%d", 5)`
#[macro_export]
macro_rules! error {
    ($($tt:tt)+) => { $crate::__log!(error, $($tt)+) };
}

/// `warn!(logger, "x=%d", 5)`
#[macro_export]
macro_rules! warn {
    ($($tt:tt)+) => { $crate::__log!(warn, $($tt)+) };
}

/// `info!(logger, "x=%d", 5)`
#[macro_export]
macro_rules! info {
    ($($tt:tt)+) => { $crate::__log!(info, $($tt)+) };
}

/// `debug!(logger, "x=%d", 5)`
#[macro_export]
macro_rules! debug {
    ($($tt:tt)+) => { $crate::__log!(debug, $($tt)+) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::tests::MemorySink;
    use std::sync::Arc;

    #[test]
    fn macros_forward_arguments() {
        let sink = Arc::new(MemorySink::new());
        let config = default_config().with_level(Level::Debug);
        let logger = LevelLogger::with_parts(Some(config), Arc::new(SystemClock), sink.clone())
            .expect("valid config");

        crate::critical!(logger, "a=%d", 1);
        crate::error!(logger, "b=%s", "two");
        crate::warn!(logger, "c");
        crate::info!(logger, "d=%v e=%v", 4, 5.5,);
        crate::debug!(logger, "f=%t", true);

        let stderr = sink.on(Target::Stderr);
        let stdout = sink.on(Target::Stdout);
        assert_eq!(stderr.len(), 2);
        assert_eq!(stdout.len(), 3);
        assert!(stderr[0].starts_with("[CRITICAL] ") && stderr[0].ends_with(" a=1\n"));
        assert!(stderr[1].starts_with("[ERROR] ") && stderr[1].ends_with(" b=two\n"));
        assert!(stdout[0].ends_with(" c\n"));
        assert!(stdout[1].ends_with(" d=4 e=5.5\n"));
        assert!(stdout[2].starts_with("[DEBUG] ") && stdout[2].ends_with(" f=true\n"));
    }
}
