//! Tests for the LDA (Load Accumulator) instruction.
//!
//! Tests cover:
//! - Every addressing mode
//! - Flag updates (Z, N) and untouched flags
//! - Cycle counts (one per memory access)

use core6502::{FlatMemory, MemoryBus, Opcode, CPU};

/// Helper: reset a fresh machine
fn setup() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

// ========== Immediate / Flags ==========

#[test]
fn test_lda_immediate_zero() {
    let (mut cpu, mut memory) = setup();
    cpu.set_a(0xFF);
    cpu.set_flag_n(true);

    // LDA #$00
    memory.load(0xFFFC, &[0xA9, 0x00]);

    assert_eq!(cpu.execute(&mut memory), Ok(Opcode::LdaImmediate));

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0xFFFE);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_immediate_negative() {
    let (mut cpu, mut memory) = setup();
    cpu.set_flag_z(true);

    // LDA #$80
    memory.load(0xFFFC, &[0xA9, 0x80]);
    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_immediate_positive() {
    let (mut cpu, mut memory) = setup();
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);

    // LDA #$7F
    memory.load(0xFFFC, &[0xA9, 0x7F]);
    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_preserves_other_flags() {
    let (mut cpu, mut memory) = setup();
    cpu.set_flag_c(true);
    cpu.set_flag_i(true);
    cpu.set_flag_d(true);
    cpu.set_flag_b(true);
    cpu.set_flag_v(true);

    memory.load(0xFFFC, &[0xA9, 0x00]);
    cpu.execute(&mut memory).unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_i());
    assert!(cpu.flag_d());
    assert!(cpu.flag_b());
    assert!(cpu.flag_v());
}

// ========== Memory Addressing Modes ==========

#[test]
fn test_lda_zero_page_cycle_count() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x0008, 0x3E);
    // LDA $08
    memory.write(0xFFFC, 0xA5);
    memory.write(0xFFFD, 0x08);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x3E);
    assert_eq!(cpu.abr(), 0x0008);
    assert_eq!(cpu.cycles(), 3); // opcode + operand + data
    assert_eq!(cpu.pc(), 0xFFFE);
}

#[test]
fn test_lda_zero_page_x() {
    let (mut cpu, mut memory) = setup();
    cpu.set_x(0x05);

    memory.write(0x0015, 0x99);
    // LDA $10,X
    memory.load(0xFFFC, &[0xB5, 0x10]);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert!(cpu.flag_n());
    assert_eq!(cpu.abr(), 0x0015);
    assert_eq!(cpu.cycles(), 4); // opcode + operand + index + data
}

#[test]
fn test_lda_absolute() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x1234, 0x42);
    // LDA $1234
    memory.load(0xFFFC, &[0xAD, 0x34, 0x12]);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.abr(), 0x1234);
    assert_eq!(cpu.cycles(), 4);
    assert_eq!(cpu.pc(), 0xFFFF);
}

#[test]
fn test_lda_absolute_x() {
    let (mut cpu, mut memory) = setup();
    cpu.set_x(0x10);

    memory.write(0x1244, 0x01);
    // LDA $1234,X
    memory.load(0xFFFC, &[0xBD, 0x34, 0x12]);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.page_crossed());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_y_page_cross_is_recorded_but_free() {
    let (mut cpu, mut memory) = setup();
    cpu.set_y(0x20);

    memory.write(0x1310, 0x77);
    // LDA $12F0,Y
    memory.load(0xFFFC, &[0xB9, 0xF0, 0x12]);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert!(cpu.page_crossed());
    assert_eq!(cpu.cycles(), 4); // no penalty by default
}

#[test]
fn test_lda_indirect_x() {
    let (mut cpu, mut memory) = setup();
    cpu.set_x(0x04);

    // Pointer at $24/$25 -> $2074
    memory.write(0x0024, 0x74);
    memory.write(0x0025, 0x20);
    memory.write(0x2074, 0xAB);
    // LDA ($20,X)
    memory.load(0xFFFC, &[0xA1, 0x20]);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0xAB);
    assert_eq!(cpu.abr(), 0x2074);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let (mut cpu, mut memory) = setup();
    cpu.set_x(0x01);

    // ($FE + 1) = $FF, high byte from $00
    memory.write(0x00FF, 0x00);
    memory.write(0x0000, 0x30);
    memory.write(0x3000, 0x5A);
    memory.load(0xFFFC, &[0xA1, 0xFE]);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x5A);
}

#[test]
fn test_lda_indirect_y() {
    let (mut cpu, mut memory) = setup();
    cpu.set_y(0x10);

    // Pointer at $86/$87 -> $4028, plus Y = $4038
    memory.write(0x0086, 0x28);
    memory.write(0x0087, 0x40);
    memory.write(0x4038, 0x00);
    cpu.set_a(0x55);
    // LDA ($86),Y
    memory.load(0xFFFC, &[0xB1, 0x86]);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.abr(), 0x4038);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lda_cycles_match_documented_base_cycles() {
    let opcodes = [
        Opcode::LdaImmediate,
        Opcode::LdaZeroPage,
        Opcode::LdaZeroPageX,
        Opcode::LdaAbsolute,
        Opcode::LdaAbsoluteX,
        Opcode::LdaAbsoluteY,
        Opcode::LdaIndirectX,
        Opcode::LdaIndirectY,
    ];

    for opcode in opcodes {
        let (mut cpu, mut memory) = setup();
        // Operands of zero never cross a page
        memory.write(0xFFFC, opcode.byte());

        cpu.execute(&mut memory).unwrap();

        assert_eq!(
            cpu.cycles(),
            u64::from(opcode.base_cycles()),
            "{opcode} charged the wrong number of cycles"
        );
        assert_eq!(cpu.pc(), 0xFFFC + u16::from(opcode.size_bytes()));
    }
}
