//! Main memory.
//!
//! A fixed 256-byte, zero-initialised address space. Every access is bounds-checked and
//! fails with [`MemoryError::OutOfRange`] instead of wrapping.

use std::fmt;

use crate::common::{MEMORY_SIZE, MemoryError};

/// The LS-8 address space.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a zeroed memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Number of cells.
    pub const fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Always `false`; present for API symmetry with slices.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfRange`] if `addr >= 256`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, MemoryError> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(MemoryError::OutOfRange { addr })
    }

    /// Writes `val` at `addr`.
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfRange`] if `addr >= 256`.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), MemoryError> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(MemoryError::OutOfRange { addr })?;
        *cell = val;
        Ok(())
    }

    /// Copies a program image to address 0. Cells past the image keep their contents.
    ///
    /// # Errors
    ///
    /// [`MemoryError::ProgramTooLarge`] if the image is longer than memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), MemoryError> {
        let dst = self
            .cells
            .get_mut(..image.len())
            .ok_or(MemoryError::ProgramTooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            })?;
        dst.copy_from_slice(image);
        Ok(())
    }

    /// The whole address space as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    /// Hex dump, 16 bytes per row, skipping all-zero rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(16).enumerate() {
            if chunk.iter().all(|&b| b == 0) {
                continue;
            }
            write!(f, "{:02X}:", row * 16)?;
            for b in chunk {
                write!(f, " {b:02X}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
