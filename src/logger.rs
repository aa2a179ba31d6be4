use crate::{
    clock::{Clock, SystemClock},
    config::{Config, Settings},
    error::ConfigError,
    format::sprintf,
    level::Level,
    sink::{Sink, StdSink, Target},
    value::Value,
};
use parking_lot::RwLock;
use std::{fmt, sync::Arc};

/// Callback notified with the level, the unformatted format string and the
/// original arguments of every accepted log call.
pub type Observer = Arc<dyn Fn(Level, &str, &[Value]) + Send + Sync>;

pub trait Logger: Send + Sync {
    fn log(&self, level: Level, format: &str, args: &[Value]);

    /// Replaces the current observer. `None` stops notifications.
    fn register_observer(&self, observer: Option<Observer>);

    fn critical(&self, format: &str, args: &[Value]) {
        self.log(Level::Critical, format, args);
    }
    fn error(&self, format: &str, args: &[Value]) {
        self.log(Level::Error, format, args);
    }
    fn warn(&self, format: &str, args: &[Value]) {
        self.log(Level::Warn, format, args);
    }
    fn info(&self, format: &str, args: &[Value]) {
        self.log(Level::Info, format, args);
    }
    fn debug(&self, format: &str, args: &[Value]) {
        self.log(Level::Debug, format, args);
    }
}

/// One severity's destination and line prefix.
#[derive(Debug, Clone, Copy)]
struct LineWriter {
    target: Target,
    prefix: &'static str,
}

impl LineWriter {
    fn for_level(level: Level) -> Self {
        Self {
            target: level.target(),
            prefix: level.tag(),
        }
    }

    /// `<TAG><timestamp> <message>`, terminated by exactly one `\n`.
    fn line(&self, timestamp: &str, message: &str) -> String {
        let mut line = format!("{}{} {}", self.prefix, timestamp, message);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn write(&self, clock: &dyn Clock, sink: &dyn Sink, message: &str) {
        sink.write_line(self.target, &self.line(&clock.timestamp(), message));
    }
}

/// Builds a logger writing to the process stdout and stderr.
pub fn create(config: Option<Config>) -> Result<LevelLogger, ConfigError> {
    LevelLogger::new(config)
}

/// Leveled logger with a fixed stdout/stderr split and a single observer slot.
///
/// The configuration is frozen at construction. The observer slot sits behind
/// a read-write lock and is cloned out before being called, so an observer may
/// log or re-register from inside its own callback.
pub struct LevelLogger {
    settings: Settings,
    writers: [LineWriter; 5],
    observer: RwLock<Option<Observer>>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn Sink>,
}

impl LevelLogger {
    pub fn new(config: Option<Config>) -> Result<Self, ConfigError> {
        Self::with_parts(config, Arc::new(SystemClock), Arc::new(StdSink))
    }

    /// Same validation as [`LevelLogger::new`] with a caller-provided clock and sink.
    pub fn with_parts(
        config: Option<Config>,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn Sink>,
    ) -> Result<Self, ConfigError> {
        let settings = config
            .ok_or(ConfigError::MissingConfiguration)?
            .validate()?;

        Ok(Self {
            settings,
            writers: Level::ALL.map(LineWriter::for_level),
            observer: RwLock::new(None),
            clock,
            sink,
        })
    }

    pub fn enabled(&self) -> bool {
        self.settings.enabled
    }

    pub fn threshold(&self) -> Level {
        self.settings.threshold
    }

    /// Whether a call at `level` would be written.
    pub fn accepts(&self, level: Level) -> bool {
        self.settings.accepts(level)
    }

    /// Registers a closure as the observer.
    pub fn on_log<F>(&self, observer: F)
    where
        F: Fn(Level, &str, &[Value]) + Send + Sync + 'static,
    {
        self.register_observer(Some(Arc::new(observer)));
    }

    pub fn clear_observer(&self) {
        self.register_observer(None);
    }
}

impl Logger for LevelLogger {
    fn log(&self, level: Level, format: &str, args: &[Value]) {
        if !self.settings.accepts(level) {
            return;
        }

        let message = sprintf(format, args);
        self.writers[level as usize].write(self.clock.as_ref(), self.sink.as_ref(), &message);

        let observer = self.observer.read().clone();
        if let Some(observer) = observer {
            observer(level, format, args);
        }
    }

    fn register_observer(&self, observer: Option<Observer>) {
        *self.observer.write() = observer;
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger")
            .field("enabled", &self.settings.enabled)
            .field("threshold", &self.settings.threshold)
            .field("observer", &self.observer.read().is_some())
            .finish_non_exhaustive()
    }
}
