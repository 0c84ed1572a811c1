//! Routes `tracing` events from the library crates to the browser console.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

const FALLBACK_FILTER: &str = "info";

/// One formatted event, flushed to the console method matching its level.
pub struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        if self.level == Level::ERROR {
            gloo_console::error!(text);
        } else if self.level == Level::WARN {
            gloo_console::warn!(text);
        } else if self.level == Level::INFO {
            gloo_console::info!(text);
        } else {
            gloo_console::debug!(text);
        }
    }
}

#[derive(Clone, Copy)]
struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. Timestamps are left to the devtools,
/// since `SystemTime` is unavailable on `wasm32-unknown-unknown`.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        gloo_console::warn!(format!("invalid logFilter {directive:?}: {err}"));
        EnvFilter::new(FALLBACK_FILTER)
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Console)
        .with_ansi(false)
        .without_time()
        .try_init();
    if let Err(err) = installed {
        gloo_console::warn!(format!("tracing subscriber not installed: {err}"));
    }
}
