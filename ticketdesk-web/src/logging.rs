//! Diagnostics for the browser.
//!
//! Events go through `tracing`; [`init`] installs a `fmt` subscriber whose
//! output lands in the developer console, with errors on `console.error`.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Hands out one [`ConsoleWriter`] per formatted event.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers a formatted line and emits it to the console on flush or drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        self.buffer.clear();
        Some(line)
    }

    fn emit(&mut self) {
        let Some(line) = self.take_line() else {
            return;
        };
        let message = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::log_1(&message),
            _ => web_sys::console::debug_1(&message),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

/// Install the console subscriber. Calling it twice keeps the first one.
pub fn init(max_level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .with_target(false)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}
