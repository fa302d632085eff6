//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone function taking the CPU, the borrowed
//! memory bus and the decoded opcode. The opcode byte has already been fetched
//! when these run; they fetch their own operands.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY
//! - **control**: JMP

pub mod control;
pub mod load_store;
