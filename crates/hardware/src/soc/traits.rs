//! Console trait for program output.
//!
//! This module defines the `Console` trait implemented by every output sink the CPU can
//! print to. The LS-8 has exactly one output instruction, `PRN`, which emits the decimal
//! value of a register on its own line.

use std::io;

/// Output sink for the `PRN` instruction.
pub trait Console {
    /// Emits `value` as a decimal number followed by a newline.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying writer.
    fn print_number(&mut self, value: u8) -> io::Result<()>;

    /// Flushes buffered output. The default does nothing.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying writer.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
