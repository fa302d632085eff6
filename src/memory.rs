//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the execute engine from a concrete memory
//! implementation. The engine borrows a bus for the duration of one call and
//! never keeps a reference to it.
//!
//! ## Design Principles
//!
//! - Reads have no side effects. Cycle accounting belongs to the CPU, not to
//!   the bus, so one `read` is one access only because the CPU says so.
//! - No bus errors: every 16-bit address is valid.

/// Number of addressable cells (64KB).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Memory bus trait for the CPU to read and write bytes.
///
/// # Examples
///
/// ```
/// use core6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.init();
/// assert_eq!(mem.read(0x1234), 0x00);
/// ```
pub trait MemoryBus {
    /// Reads the byte at `addr`.
    fn read(&self, addr: u16) -> u8;

    /// Writes `value` to `addr`.
    fn write(&mut self, addr: u16, value: u8);

    /// Sets every cell to zero. Called by [`CPU::reset`](crate::CPU::reset).
    fn init(&mut self);
}

/// Flat 64KB memory where every address maps to one RAM cell.
///
/// Addresses are `u16` and the backing array holds exactly [`MEMORY_SIZE`]
/// cells, so indexing cannot go out of range. There is no wraparound logic
/// here; if the array and address width ever disagreed, indexing would panic.
#[derive(Clone, PartialEq, Eq)]
pub struct FlatMemory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a zero-filled memory image.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFC, &[0x4C, 0x00, 0x01]);
    /// assert_eq!(mem.read(0xFFFE), 0x01);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// The whole memory image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("FlatMemory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_cells", &used)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[usize::from(addr)]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[usize::from(addr)] = value;
    }

    fn init(&mut self) {
        self.data.fill(0);
    }
}
