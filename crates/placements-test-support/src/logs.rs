//! Capture of `tracing` output as JSON records.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::subscriber::DefaultGuard;

#[derive(Debug, Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Installs a JSON `tracing` subscriber as the thread default for as long as
/// it is alive. Works with `#[tokio::test]`'s current-thread runtime.
pub struct LogCapture {
    buffer: SharedBuffer,
    _guard: DefaultGuard,
}

impl LogCapture {
    /// Starts capturing every event at `TRACE` and above.
    #[must_use]
    pub fn start() -> Self {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        Self {
            buffer,
            _guard: guard,
        }
    }

    /// Returns every record captured so far, one JSON object per event.
    ///
    /// # Panics
    ///
    /// Panics if the output is not line-delimited JSON.
    #[must_use]
    pub fn records(&self) -> Vec<serde_json::Value> {
        let bytes = self.buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    /// Records emitted at `level` (e.g. `"WARN"`).
    #[must_use]
    pub fn records_at(&self, level: &str) -> Vec<serde_json::Value> {
        self.records()
            .into_iter()
            .filter(|record| record["level"] == level)
            .collect()
    }
}

/// Runs `f` and returns the JSON records it logged.
pub fn capture_json_logs(f: impl FnOnce()) -> Vec<serde_json::Value> {
    let capture = LogCapture::start();
    f();
    capture.records()
}
