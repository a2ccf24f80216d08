//! Output sinks

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for composed log lines
pub type Sink = Box<dyn Write + Send>;

/// The default sink: process standard output
pub fn stdout_sink() -> Sink {
    Box::new(io::stdout())
}

/// In-memory sink that can be cloned and inspected
///
/// All clones share the same buffer, so one clone can be handed to a
/// logger while another reads back what was written.
///
/// # Example
///
/// ```
/// use llog_core::{BufferSink, LineLogger};
///
/// let sink = BufferSink::new();
/// let logger = LineLogger::new().with_output(sink.clone());
/// logger.info("hello");
/// assert!(sink.contents().contains("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    /// Create an empty buffer sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines, without their trailing newline
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Drop everything written so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    /// Whether nothing has been written since creation or the last clear
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_shares_state() {
        let sink = BufferSink::new();
        assert!(sink.is_empty());

        let mut writer = sink.clone();
        writer.write_all(b"one\ntwo\n").unwrap();

        assert_eq!(sink.contents(), "one\ntwo\n");
        assert_eq!(sink.lines(), vec!["one", "two"]);

        sink.clear();
        assert!(sink.is_empty());
        assert!(writer.contents().is_empty());
    }
}
