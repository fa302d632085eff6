//! # Load Instructions
//!
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//!
//! All three share one flag rule: Z and N are recomputed from the loaded value
//! alone, and no other flag is touched.

use crate::{MemoryBus, Opcode, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Addressing modes: Immediate, Zero Page, Zero Page,X, Absolute,
/// Absolute,X, Absolute,Y, (Indirect,X), (Indirect),Y.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU, memory: &M, opcode: Opcode) {
    cpu.a = cpu.load_operand(memory, opcode.addressing_mode());
    cpu.status.set_zn(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Addressing modes: Immediate, Zero Page, Zero Page,Y, Absolute, Absolute,Y.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU, memory: &M, opcode: Opcode) {
    cpu.x = cpu.load_operand(memory, opcode.addressing_mode());
    cpu.status.set_zn(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Addressing modes: Immediate, Zero Page, Zero Page,X, Absolute, Absolute,X.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU, memory: &M, opcode: Opcode) {
    cpu.y = cpu.load_operand(memory, opcode.addressing_mode());
    cpu.status.set_zn(cpu.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_lda_leaves_carry_and_overflow() {
        let mut memory = FlatMemory::new();
        let mut cpu = CPU::new();
        cpu.reset(&mut memory);
        cpu.set_flag_c(true);
        cpu.set_flag_v(true);
        cpu.set_a(0x80);
        memory.load(0xFFFC, &[0xA9, 0x00]);
        // Opcode byte already consumed
        cpu.set_pc(0xFFFD);

        execute_lda(&mut cpu, &memory, Opcode::LdaImmediate);

        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.flag_z());
        assert!(!cpu.flag_n());
        assert!(cpu.flag_c());
        assert!(cpu.flag_v());
    }

    #[test]
    fn test_ldx_zero_page_y() {
        let mut memory = FlatMemory::new();
        let mut cpu = CPU::new();
        cpu.reset(&mut memory);
        cpu.set_x(0x55);
        cpu.set_y(0x04);
        memory.write(0xFFFC, 0x10);

        execute_ldx(&mut cpu, &memory, Opcode::LdxZeroPageY);

        assert_eq!(cpu.x(), 0x00);
        assert!(cpu.flag_z());
        assert_eq!(cpu.abr(), 0x0014);
        // operand fetch + index + read
        assert_eq!(cpu.cycles(), 3);
    }
}
