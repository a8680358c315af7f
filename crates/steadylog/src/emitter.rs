//! crates/steadylog/src/emitter.rs
//! Line rendering and the writers that receive it.
//!
//! Every passing record becomes exactly one line:
//!
//! ```text
//! <ms>: <LVL>  <module>  <message>  (<file>:<line>)
//! ```
//!
//! The elapsed milliseconds are left-aligned in at least four columns and the
//! module column is omitted when the record carries none. The line is rendered
//! into a buffer first and handed to the writer in a single `write_all`.

use std::cell::RefCell;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::time::Instant;

use crate::level::Severity;
use crate::path::strip_path;
use crate::state::logger;
use crate::style::TextStyle;

/// One log call's worth of data. Built per call and never stored.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    severity: Severity,
    file: &'a str,
    line: u32,
    module: Option<&'a str>,
    args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    /// Creates a record without a module name.
    #[must_use]
    pub const fn new(
        severity: Severity,
        file: &'a str,
        line: u32,
        args: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            severity,
            file,
            line,
            module: None,
            args,
        }
    }

    /// Attaches a module name.
    #[must_use]
    pub const fn with_module(mut self, module: Option<&'a str>) -> Self {
        self.module = module;
        self
    }

    /// Severity of the record.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Source file as given by the call site.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Source line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Module name, if any.
    #[must_use]
    pub const fn module(&self) -> Option<&'a str> {
        self.module
    }

    /// Unrendered message.
    #[must_use]
    pub const fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }
}

/// Appends the rendered line for `record`, newline included, to `out`.
///
/// With `styled` set the body and the location annotation are wrapped in the
/// severity's escape sequences; the newline never is.
pub fn render_line(
    out: &mut String,
    record: &Record<'_>,
    elapsed_ms: u128,
    styled: bool,
) -> fmt::Result {
    let (body, location) = if styled {
        (
            TextStyle::body(record.severity),
            TextStyle::location(record.severity),
        )
    } else {
        (TextStyle::PLAIN, TextStyle::PLAIN)
    };

    body.paint(out, |o| {
        write!(o, "{elapsed_ms:<4}: {}  ", record.severity.code())?;
        if let Some(module) = record.module {
            write!(o, "{module}  ")?;
        }
        o.write_fmt(record.args)
    })?;
    location.paint(out, |o| {
        write!(o, "  ({}:{})", strip_path(record.file), record.line)
    })?;
    out.push('\n');
    Ok(())
}

/// Filters, renders and writes records into any [`io::Write`] target.
///
/// The emitter carries its own threshold, styling flag and epoch, so it does
/// not touch the process-wide state. The rendering buffer is reused across
/// calls.
///
/// ```
/// use steadylog::{Emitter, Record, Severity};
///
/// let mut emitter = Emitter::new(Vec::new(), Severity::Info);
/// emitter.emit(&Record::new(Severity::Info, "src/net/peer.rs", 42, format_args!("x={}", 5)))?;
/// emitter.emit(&Record::new(Severity::Debug, "src/net/peer.rs", 43, format_args!("hidden")))?;
///
/// let output = String::from_utf8(emitter.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 1);
/// assert!(output.ends_with("INF  x=5  (peer.rs:42)\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Emitter<W> {
    writer: W,
    threshold: Severity,
    styled: bool,
    epoch: Instant,
    buffer: String,
}

impl<W> Emitter<W> {
    /// Creates a plain-text emitter whose epoch is now.
    #[must_use]
    pub fn new(writer: W, threshold: Severity) -> Self {
        Self {
            writer,
            threshold,
            styled: false,
            epoch: Instant::now(),
            buffer: String::new(),
        }
    }

    /// Enables or disables escape sequences.
    #[must_use]
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Measures elapsed time from `epoch`.
    #[must_use]
    pub fn with_epoch(mut self, epoch: Instant) -> Self {
        self.epoch = epoch;
        self
    }

    /// Current threshold.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Replaces the threshold.
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// Reports whether output is styled.
    #[must_use]
    pub const fn is_styled(&self) -> bool {
        self.styled
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the emitter and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Emitter<W>
where
    W: Write,
{
    /// Writes `record` if it passes the threshold.
    ///
    /// Filtered records return before the clock is read or anything is
    /// formatted.
    pub fn emit(&mut self, record: &Record<'_>) -> io::Result<()> {
        if !record.severity.passes(self.threshold) {
            return Ok(());
        }
        let elapsed_ms = self.epoch.elapsed().as_millis();
        self.buffer.clear();
        render_line(&mut self.buffer, record, elapsed_ms, self.styled)
            .map_err(|_| io::Error::other("a formatting trait implementation returned an error"))?;
        self.writer.write_all(self.buffer.as_bytes())
    }

    /// Writes a bare newline regardless of the threshold.
    pub fn blank_line(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

thread_local! {
    static LINE: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Emits one line on standard error through the process-wide state.
///
/// The first call latches the threshold if nothing did before. Filtered calls
/// return without reading the clock or formatting. Write failures are
/// dropped; logging never takes the host down.
pub fn emit(
    severity: Severity,
    file: &str,
    line: u32,
    module: Option<&str>,
    args: fmt::Arguments<'_>,
) {
    let state = logger();
    if !severity.passes(state.threshold()) {
        return;
    }
    let record = Record::new(severity, file, line, args).with_module(module);
    let elapsed_ms = state.epoch().elapsed().as_millis();
    let styled = state.should_style();

    let write = |buffer: &mut String| {
        buffer.clear();
        if render_line(buffer, &record, elapsed_ms, styled).is_ok() {
            let _ = io::stderr().lock().write_all(buffer.as_bytes());
        }
    };

    // A message argument that logs from inside its Display impl finds the
    // buffer borrowed and renders into a fresh one.
    let reused = LINE.try_with(|cell| match cell.try_borrow_mut() {
        Ok(mut buffer) => {
            write(&mut buffer);
            true
        }
        Err(_) => false,
    });
    if !matches!(reused, Ok(true)) {
        write(&mut String::new());
    }
}

/// Writes a bare newline to standard error, unfiltered.
pub fn emit_blank_line() {
    let _ = io::stderr().lock().write_all(b"\n");
}
