//! Jump chain example
//!
//! Runs the classic two-instruction smoke program from the reset vector:
//!
//! ```text
//! $FFFC  JMP $0100
//! $0100  JMP ($0200)     ; $0200/$0201 hold $1234
//! ```
//!
//! and prints where the program counter ended up and how many cycles it took.

use core6502::{FlatMemory, MemoryBus, CPU};

fn main() {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);

    // Power-on reset: JMP $0100
    memory.load(0xFFFC, &[0x4C, 0x00, 0x01]);
    // JMP ($0200)
    memory.load(0x0100, &[0x6C, 0x00, 0x02]);
    // Target $1234, little-endian
    memory.write(0x0200, 0x34);
    memory.write(0x0201, 0x12);

    for _ in 0..2 {
        match cpu.execute(&mut memory) {
            Ok(opcode) => println!("executed {opcode}"),
            Err(e) => eprintln!("skipped: {e}"),
        }
    }

    println!("PC at 0x{:x}.", cpu.pc());
    println!("CPU ran for {} machine cycles.", cpu.cycles());
}
