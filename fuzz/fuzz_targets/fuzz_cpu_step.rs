//! Fuzz target for single-instruction execution.
//!
//! Builds arbitrary register state and memory contents around the reset
//! vector, executes one instruction and checks the skip invariant.

#![no_main]

use arbitrary::Arbitrary;
use core6502::{CpuConfig, FlatMemory, MemoryBus, Opcode, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC status byte
    status: u8,
    /// Use NMOS addressing quirks instead of the defaults
    nmos: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the reset vector (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents (reachable through unmasked zero page indexing)
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let config = if input.cpu_state.nmos {
        CpuConfig::nmos()
    } else {
        CpuConfig::default()
    };

    let mut memory = FlatMemory::new();
    let mut cpu = CPU::with_config(config);
    cpu.reset(&mut memory);

    memory.load(0xFFFC, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    let before = memory.clone();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    let start = cpu.clone();

    let result = cpu.execute(&mut memory);

    // Only loads and jumps run; none of them write memory
    assert!(memory == before);

    match result {
        Ok(opcode) => {
            assert!(opcode.is_implemented());
            assert_eq!(cpu.sp(), start.sp());
            // Loads and jumps never touch C, I, D, B or V
            assert_eq!(cpu.status() & 0b0101_1101, start.status() & 0b0101_1101);
        }
        Err(err) => {
            assert!(Opcode::from_byte(err.opcode_byte()).map_or(true, |op| !op.is_implemented()));
            assert_eq!(cpu.pc(), 0xFFFD);
            assert_eq!(cpu.cycles(), 1);
            assert_eq!(cpu.a(), start.a());
            assert_eq!(cpu.x(), start.x());
            assert_eq!(cpu.y(), start.y());
            assert_eq!(cpu.status(), start.status());
        }
    }
});
