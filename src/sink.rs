use std::io::Write;

use wasm_bindgen::JsValue;
use web_sys::console;

/// Where drawing output ends up. Every primitive and every decoration emits
/// exactly one line.
pub trait Sink {
    fn emit(&mut self, line: &str);
}

#[derive(Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&mut self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(err) = writeln!(handle, "{}", line) {
            log::warn!("failed to write drawing output: {}", err);
        }
    }
}

// 浏览器控制台
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&mut self, line: &str) {
        console::log_1(&JsValue::from_str(line));
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Sink for MemorySink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Threaded through every `draw` call of a single pass.
pub struct DrawContext<'a> {
    sink: &'a mut dyn Sink,
    emitted: usize,
}

impl<'a> DrawContext<'a> {
    pub fn new(sink: &'a mut dyn Sink) -> Self {
        Self { sink, emitted: 0 }
    }

    pub fn emit(&mut self, line: &str) {
        log::trace!("emit #{}: {}", self.emitted, line);
        self.sink.emit(line);
        self.emitted += 1;
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl std::fmt::Debug for DrawContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DrawContext {{ emitted: {} }}", self.emitted)
    }
}
