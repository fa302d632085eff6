//! # 6502 Instruction Decode/Execute Core
//!
//! A cycle-counting NMOS 6502 core: fetch one instruction at the program
//! counter, resolve its addressing mode, apply its effect to registers and
//! flags, and charge one cycle per memory access.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{FlatMemory, MemoryBus, CPU};
//!
//! let mut memory = FlatMemory::new();
//! let mut cpu = CPU::new();
//! cpu.reset(&mut memory);
//!
//! // Execution starts at the reset vector address itself: JMP $0100
//! memory.load(0xFFFC, &[0x4C, 0x00, 0x01]);
//! // LDA #$80
//! memory.load(0x0100, &[0xA9, 0x80]);
//!
//! cpu.execute(&mut memory).unwrap();
//! cpu.execute(&mut memory).unwrap();
//!
//! assert_eq!(cpu.pc(), 0x0102);
//! assert_eq!(cpu.a(), 0x80);
//! assert!(cpu.flag_n());
//! assert_eq!(cpu.cycles(), 5);
//! ```
//!
//! ## Architecture
//!
//! - **Ownership**: the CPU is only the register record. Memory is passed in
//!   by reference for each [`CPU::reset`] / [`CPU::execute`] call and is never
//!   retained, so independent machines share nothing.
//! - **Closed opcode set**: every documented mnemonic/mode pair has an
//!   [`Opcode`] variant; execution logic is added one arm at a time.
//! - **Cycle counting**: one cycle per memory access, plus one for the index
//!   addition of the zero page indexed and (zp,X) modes.
//! - **Non-fatal unknown opcodes**: reported through the `log` facade and
//!   returned as an [`ExecutionError`]; nothing but the opcode fetch happens.
//!
//! ## Memory Map
//!
//! | Range           | Use                          |
//! |-----------------|------------------------------|
//! | `$0000-$00FF`   | Zero page                    |
//! | `$0100-$01FF`   | Stack                        |
//! | `$FFFA-$FFFB`   | NMI vector (reserved)        |
//! | `$FFFC-$FFFD`   | Power-on reset vector        |
//! | `$FFFE-$FFFF`   | IRQ/BRK vector (reserved)    |

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use addressing::AddressingMode;
pub use config::{CpuConfig, IndirectJump, ZeroPageIndexing};
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{Mnemonic, Opcode, OpcodeMetadata};
pub use status::StatusFlags;

/// First byte of the zero page.
pub const ZERO_PAGE_START: u16 = 0x0000;
/// Last byte of the zero page.
pub const ZERO_PAGE_END: u16 = 0x00FF;
/// Bottom of the stack page; SP is an offset from here.
pub const STACK_PAGE_START: u16 = 0x0100;
/// Top of the stack page.
pub const STACK_PAGE_END: u16 = 0x01FF;
/// Non-maskable interrupt vector. Reserved; interrupts are not delivered.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Power-on reset vector. [`CPU::reset`] points PC here.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector. Reserved; interrupts are not delivered.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Reasons an instruction step was skipped.
///
/// Neither case is fatal. The step has already consumed the opcode byte
/// (PC + 1, one cycle) and nothing else changed; callers can log the error and
/// keep stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The byte is not a documented 6502 opcode.
    #[error("illegal opcode ${opcode:02X} at ${address:04X}")]
    IllegalOpcode { opcode: u8, address: u16 },

    /// The opcode is documented but has no execution logic yet.
    #[error("unimplemented opcode {opcode} at ${address:04X}")]
    UnimplementedOpcode { opcode: Opcode, address: u16 },
}

impl ExecutionError {
    /// The raw byte that was fetched.
    pub fn opcode_byte(&self) -> u8 {
        match self {
            ExecutionError::IllegalOpcode { opcode, .. } => *opcode,
            ExecutionError::UnimplementedOpcode { opcode, .. } => opcode.byte(),
        }
    }

    /// Address the opcode was fetched from.
    pub fn address(&self) -> u16 {
        match self {
            ExecutionError::IllegalOpcode { address, .. }
            | ExecutionError::UnimplementedOpcode { address, .. } => *address,
        }
    }
}
