use std::io::{self, Write};

/// Process stream a line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Stdout,
    Stderr,
}

/// Line-oriented destination. `line` arrives terminated with `\n` and is
/// written as-is.
pub trait Sink: Send + Sync {
    fn write_line(&self, target: Target, line: &str);
}

/// Writes to the process stdout and stderr.
pub struct StdSink;

impl Sink for StdSink {
    fn write_line(&self, target: Target, line: &str) {
        // A single write_all under the stream lock keeps lines whole.
        let _ = match target {
            Target::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            Target::Stderr => io::stderr().lock().write_all(line.as_bytes()),
        };
    }
}
