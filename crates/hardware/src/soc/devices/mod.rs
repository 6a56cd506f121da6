//! Output devices.
//!
//! The only device the LS-8 drives is the console behind `PRN`.

/// Console sinks (writer-backed and capturing).
pub mod console;

pub use console::{CaptureConsole, WriterConsole};
