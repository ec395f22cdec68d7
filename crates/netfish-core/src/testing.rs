//! Capture of netfish diagnostics for tests.
//!
//! ```
//! use netfish_core::{render_error, testing::capture_diagnostics};
//!
//! let captured = capture_diagnostics();
//! render_error("boom");
//! assert_eq!(captured.messages(), ["Netfish Error | boom"]);
//! ```

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layer, SubscriberExt};

use crate::diagnostic::{DIAGNOSTIC_PREFIX, DIAGNOSTIC_TARGET};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = SharedBuf;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Diagnostics recorded on the current thread while this value is alive.
pub struct DiagnosticCapture {
    buf: SharedBuf,
    _guard: DefaultGuard,
}

/// Records every event whose target is exactly `netfish` on the current
/// thread.
///
/// Works with `#[tokio::test]`, whose default runtime polls on the test
/// thread.
pub fn capture_diagnostics() -> DiagnosticCapture {
    let buf = SharedBuf::default();

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(buf.clone())
        .with_ansi(false)
        .without_time()
        .with_filter(filter_fn(|meta| meta.target() == DIAGNOSTIC_TARGET));
    let subscriber = tracing_subscriber::registry().with(layer);

    DiagnosticCapture {
        buf,
        _guard: tracing::subscriber::set_default(subscriber),
    }
}

impl DiagnosticCapture {
    /// Formatted lines, one per event: level, target, message, fields.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.buf.0.lock())
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Just the `Netfish Error | ...` messages, without level or fields.
    pub fn messages(&self) -> Vec<String> {
        self.lines()
            .iter()
            .filter_map(|line| {
                let start = line.find(DIAGNOSTIC_PREFIX)?;
                let message = &line[start..];
                let end = message.find(" status=").unwrap_or(message.len());
                Some(message[..end].to_owned())
            })
            .collect()
    }
}
