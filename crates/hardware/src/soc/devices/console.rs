//! Console implementations.
//!
//! This module provides the sinks `PRN` can print to:
//! 1. **`WriterConsole`:** Writes decimal lines to any [`io::Write`] (stdout by default).
//! 2. **`CaptureConsole`:** Records printed values in memory, for embedding and tests.

use std::cell::RefCell;
use std::io::{self, Stdout, Write};
use std::rc::Rc;

use crate::soc::traits::Console;

/// Console that writes one decimal number per line to a writer.
#[derive(Debug)]
pub struct WriterConsole<W: Write> {
    out: W,
}

impl<W: Write> WriterConsole<W> {
    /// Wraps a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterConsole<Stdout> {
    /// Console on the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn print_number(&mut self, value: u8) -> io::Result<()> {
        writeln!(self.out, "{value}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Console that records every printed value.
///
/// Clones share the same buffer, so a caller can keep one handle and give the other
/// to the CPU.
#[derive(Debug, Clone, Default)]
pub struct CaptureConsole {
    values: Rc<RefCell<Vec<u8>>>,
}

impl CaptureConsole {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values printed so far, in order.
    pub fn values(&self) -> Vec<u8> {
        self.values.borrow().clone()
    }

    /// Printed output exactly as a `WriterConsole` would have produced it.
    pub fn text(&self) -> String {
        self.values
            .borrow()
            .iter()
            .map(|v| format!("{v}\n"))
            .collect()
    }
}

impl Console for CaptureConsole {
    fn print_number(&mut self, value: u8) -> io::Result<()> {
        self.values.borrow_mut().push(value);
        Ok(())
    }
}
