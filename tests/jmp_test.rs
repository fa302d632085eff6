//! Tests for the JMP (Jump) instruction.
//!
//! Tests cover:
//! - Absolute (0x4C) and Indirect (0x6C) forms
//! - Cycle counts
//! - The reset-vector jump chain
//! - No flags or registers affected

use core6502::{FlatMemory, MemoryBus, CPU};

fn setup() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_jmp_absolute_from_reset_vector() {
    let (mut cpu, mut memory) = setup();

    // JMP $0100
    memory.load(0xFFFC, &[0x4C, 0x00, 0x01]);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x0100);
    assert_eq!(cpu.abr(), 0x0100);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_jmp_indirect_chain() {
    let (mut cpu, mut memory) = setup();

    // $FFFC: JMP $0100
    memory.load(0xFFFC, &[0x4C, 0x00, 0x01]);
    // $0100: JMP ($0200)
    memory.load(0x0100, &[0x6C, 0x00, 0x02]);
    // $0200: $1234
    memory.write(0x0200, 0x34);
    memory.write(0x0201, 0x12);

    cpu.execute(&mut memory).unwrap();
    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.cycles(), 3 + 5);
}

#[test]
fn test_jmp_indirect_cycle_count() {
    let (mut cpu, mut memory) = setup();

    memory.load(0xFFFC, &[0x6C, 0x00, 0x03]);
    memory.load(0x0300, &[0xCD, 0xAB]);

    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0xABCD);
    assert_eq!(cpu.cycles(), 5); // opcode + 2 pointer bytes + 2 target bytes
}

#[test]
fn test_jmp_affects_no_flags_or_registers() {
    let (mut cpu, mut memory) = setup();
    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_y(0x33);
    cpu.set_sp(0x44);
    cpu.set_status(0b1100_0011);
    let status = cpu.status();

    memory.load(0xFFFC, &[0x4C, 0x34, 0x12]);
    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.x(), 0x22);
    assert_eq!(cpu.y(), 0x33);
    assert_eq!(cpu.sp(), 0x44);
    assert_eq!(cpu.status(), status);
}

#[test]
fn test_jmp_to_self_loops() {
    let (mut cpu, mut memory) = setup();

    memory.load(0xFFFC, &[0x4C, 0x00, 0x40]);
    memory.load(0x4000, &[0x4C, 0x00, 0x40]);

    for _ in 0..10 {
        cpu.execute(&mut memory).unwrap();
    }

    assert_eq!(cpu.pc(), 0x4000);
    assert_eq!(cpu.cycles(), 30);
}

#[test]
fn test_jmp_then_load() {
    let (mut cpu, mut memory) = setup();

    memory.load(0xFFFC, &[0x4C, 0x00, 0x80]);
    // LDA #$42
    memory.load(0x8000, &[0xA9, 0x42]);

    cpu.execute(&mut memory).unwrap();
    cpu.execute(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 5);
}
