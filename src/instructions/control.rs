//! # Control Flow Instructions
//!
//! - JMP: Jump to address
//!
//! JMP affects no flags and does not touch the stack.

use crate::{MemoryBus, Opcode, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - PC becomes $1234
/// - Indirect (0x6C): JMP ($1234) - PC becomes the word stored at $1234/$1235
///
/// Cycle timing (one per memory access, opcode fetch included):
/// - Absolute: 3 cycles
/// - Indirect: 5 cycles
///
/// The indirect form performs exactly one 16-bit read at the pointer. Whether
/// a pointer of `$xxFF` takes its high byte from the next page or from
/// `$xx00` is set by [`IndirectJump`](crate::IndirectJump).
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU, memory: &M, opcode: Opcode) {
    cpu.pc = cpu.resolve_address(memory, opcode.addressing_mode());
}
