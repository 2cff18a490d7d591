//! Route `tracing` events to the browser console

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Hands out one [`ConsoleLine`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

/// Buffers one formatted event and logs it when dropped
pub struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleLine {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }

    /// The buffered text without its trailing newline
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl Write for ConsoleLine {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = self.text();
        if text.is_empty() {
            return;
        }
        let text = JsValue::from(text);
        if self.level == Level::ERROR {
            web_sys::console::error_1(&text);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&text);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&text);
        } else {
            web_sys::console::debug_1(&text);
        }
    }
}

/// Install the console subscriber; later calls are ignored
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(Console)
        .with_ansi(false)
        .without_time()
        .try_init();
    if installed.is_ok() {
        tracing::debug!("console logging ready");
    }
}
