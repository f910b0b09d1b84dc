//! Handler writing one line per record to an `io::Write` sink.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::handler::{Handler, HandlerError};
use crate::priority::Priority;

/// Writes each accepted message, newline-terminated, to a stream.
pub struct StreamHandler<W: Write + Send> {
    level: Priority,
    writer: Mutex<W>,
    closed: AtomicBool,
}

impl StreamHandler<io::Stderr> {
    /// Handler bound to the process's standard error.
    pub fn stderr(level: Priority) -> Self {
        Self::new(io::stderr(), level)
    }
}

impl StreamHandler<io::Stdout> {
    /// Handler bound to the process's standard output.
    pub fn stdout(level: Priority) -> Self {
        Self::new(io::stdout(), level)
    }
}

impl<W: Write + Send> StreamHandler<W> {
    /// Wrap an arbitrary writer.
    pub fn new(writer: W, level: Priority) -> Self {
        Self {
            level,
            writer: Mutex::new(writer),
            closed: AtomicBool::new(false),
        }
    }

    /// Run `f` against the underlying writer while holding its lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&W) -> R) -> Result<R, HandlerError> {
        let writer = self.writer.lock().map_err(|_| HandlerError::Poisoned)?;
        Ok(f(&*writer))
    }
}

impl<W: Write + Send> fmt::Debug for StreamHandler<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandler")
            .field("level", &self.level)
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .finish()
    }
}

impl<W: Write + Send> Handler for StreamHandler<W> {
    fn level(&self) -> Priority {
        self.level
    }

    fn emit(&self, _logger: &str, _priority: Priority, message: &str) -> Result<(), HandlerError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(HandlerError::Closed);
        }
        let mut writer = self.writer.lock().map_err(|_| HandlerError::Poisoned)?;
        // Single write call so concurrent records never interleave mid-line.
        let line = format!("{}\n", message);
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn close(&self) -> Result<(), HandlerError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        let mut writer = self.writer.lock().map_err(|_| HandlerError::Poisoned)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(h: &StreamHandler<Vec<u8>>) -> String {
        h.inspect(|buf| String::from_utf8_lossy(buf).into_owned()).unwrap()
    }

    #[test]
    fn test_writes_one_line_per_record() {
        let h = StreamHandler::new(Vec::new(), Priority::Debug);
        h.handle("app", Priority::Info, "first").unwrap();
        h.handle("app", Priority::Error, "second").unwrap();
        assert_eq!(contents(&h), "first\nsecond\n");
    }

    #[test]
    fn test_filters_below_level() {
        let h = StreamHandler::new(Vec::new(), Priority::Warning);
        h.handle("app", Priority::Notice, "quiet").unwrap();
        h.handle("app", Priority::Warning, "loud").unwrap();
        assert_eq!(contents(&h), "loud\n");
    }

    #[test]
    fn test_closed_handler_rejects_records() {
        let h = StreamHandler::new(Vec::new(), Priority::Debug);
        h.close().unwrap();
        // Closing twice is harmless.
        h.close().unwrap();

        let err = h.handle("app", Priority::Alert, "late").unwrap_err();
        assert!(matches!(err, HandlerError::Closed));
        // Filtered records never reach the closed check.
        let strict = StreamHandler::new(Vec::new(), Priority::Alert);
        strict.close().unwrap();
        assert!(strict.handle("app", Priority::Debug, "x").is_ok());
    }

    #[test]
    fn test_write_failure_is_reported() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let h = StreamHandler::new(Broken, Priority::Debug);
        let err = h.handle("app", Priority::Error, "boom").unwrap_err();
        assert!(matches!(err, HandlerError::Io(_)));
    }
}
