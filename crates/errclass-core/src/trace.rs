//! Diagnostic trace capture.
//!
//! A trace is rendered as:
//!
//! ```text
//! NotFoundError: Resource not found
//!     at my_app::load_page (src/pages.rs:42)
//!     at my_app::main (src/main.rs:7)
//! ```
//!
//! The stack is rooted at whoever called the category constructor: frames of
//! this crate's construction path and of the capture library are cut off.

use std::path::Path;

use backtrace::{Backtrace, BacktraceSymbol};
use serde::{Deserialize, Serialize};

const INTERNAL_PATHS: &[&str] = &["errclass_core::category::", "errclass_core::trace::"];
const CAPTURE_LIBRARY: &str = "backtrace::";

/// Trace capture settings for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Capture stack frames at all. When false the trace is only the header line.
    pub capture: bool,

    /// Maximum number of frames rendered below the header.
    pub frame_limit: usize,
}

impl TraceConfig {
    /// Default settings (10 frames, same depth as the classic JS engines).
    pub fn default_v1() -> Self {
        Self {
            capture: true,
            frame_limit: 10,
        }
    }

    /// Header line only; no stack walk.
    pub fn disabled() -> Self {
        Self {
            capture: false,
            frame_limit: 0,
        }
    }

    pub fn with_frame_limit(mut self, frame_limit: usize) -> Self {
        self.frame_limit = frame_limit;
        self
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// One rendered stack entry (an inlined call gets its own entry).
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrameLine {
    symbol: Option<String>,
    location: Option<String>,
}

impl FrameLine {
    fn from_symbol(symbol: &BacktraceSymbol) -> Self {
        let location = symbol
            .filename()
            .map(|file| render_location(file, symbol.lineno()));
        Self {
            symbol: symbol.name().map(|name| format!("{name:#}")),
            location,
        }
    }

    fn unknown() -> Self {
        Self {
            symbol: None,
            location: None,
        }
    }

    fn is_internal(&self) -> bool {
        self.symbol.as_deref().is_some_and(is_internal_symbol)
    }

    fn is_capture_library(&self) -> bool {
        self.symbol
            .as_deref()
            .is_some_and(|s| s.starts_with(CAPTURE_LIBRARY))
    }

    fn render(&self) -> String {
        let symbol = self.symbol.as_deref().unwrap_or("<unknown>");
        match &self.location {
            Some(location) => format!("    at {symbol} ({location})"),
            None => format!("    at {symbol}"),
        }
    }
}

fn render_location(file: &Path, line: Option<u32>) -> String {
    match line {
        Some(line) => format!("{}:{line}", file.display()),
        None => file.display().to_string(),
    }
}

fn is_internal_symbol(symbol: &str) -> bool {
    // unit tests of this crate are callers, not construction machinery
    !symbol.contains("::tests::") && INTERNAL_PATHS.iter().any(|path| symbol.contains(path))
}

/// Drop everything up to and including the outermost internal frame.
///
/// If inlining removed every internal frame, only the capture library's own
/// frames are dropped.
fn caller_frames(lines: Vec<FrameLine>) -> Vec<FrameLine> {
    match lines.iter().rposition(FrameLine::is_internal) {
        Some(boundary) => lines.into_iter().skip(boundary + 1).collect(),
        None => lines
            .into_iter()
            .skip_while(FrameLine::is_capture_library)
            .collect(),
    }
}

/// Capture a trace whose first line is `header`.
#[inline(never)]
pub(crate) fn capture(header: &str, config: &TraceConfig) -> String {
    let mut trace = header.to_string();
    if !config.capture || config.frame_limit == 0 {
        return trace;
    }

    let backtrace = Backtrace::new();
    let lines = backtrace
        .frames()
        .iter()
        .flat_map(|frame| {
            let symbols = frame.symbols();
            if symbols.is_empty() {
                vec![FrameLine::unknown()]
            } else {
                symbols.iter().map(FrameLine::from_symbol).collect()
            }
        })
        .collect();

    for line in caller_frames(lines).iter().take(config.frame_limit) {
        trace.push('\n');
        trace.push_str(&line.render());
    }
    trace
}
