//! # CPU State and Execution
//!
//! This module contains the CPU register record and the fetch-decode-execute
//! step that drives it.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction byte
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (see [`StatusFlags`])
//! - **ABR**: effective-address register, the last address resolved
//! - **Cycle counter**: memory accesses since the last reset
//!
//! ## Execution Model
//!
//! - `reset()`: zero memory and registers, point PC at the reset vector
//! - `execute()`: run exactly one instruction
//! - `run_for_cycles()`: execute until a cycle budget is used up
//!
//! The CPU never owns memory. Each call borrows a [`MemoryBus`] and releases
//! it on return.

use log::{debug, trace, warn};

use crate::config::{CpuConfig, IndirectJump, ZeroPageIndexing};
use crate::instructions::{control, load_store};
use crate::{
    AddressingMode, ExecutionError, MemoryBus, Mnemonic, Opcode, StatusFlags, RESET_VECTOR,
};

/// 6502 register record and execute engine.
///
/// # Examples
///
/// ```
/// use core6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// let mut cpu = CPU::new();
/// cpu.reset(&mut memory);
///
/// // LDA $08 placed at the reset vector
/// memory.write(0x0008, 0x3E);
/// memory.write(0xFFFC, 0xA5);
/// memory.write(0xFFFD, 0x08);
///
/// cpu.execute(&mut memory).unwrap();
/// assert_eq!(cpu.a(), 0x3E);
/// assert_eq!(cpu.cycles(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CPU {
    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    pub(crate) status: StatusFlags,

    /// Effective-address register. Wider than the bus so indexed sums are
    /// formed without truncation before the mode's own masking step.
    pub(crate) abr: u32,

    /// Memory accesses since the last reset
    pub(crate) cycles: u64,

    /// Set when the last indexed resolution moved to another page
    pub(crate) page_crossed: bool,

    pub(crate) config: CpuConfig,
}

impl CPU {
    /// Creates a CPU in the reset state with the default configuration.
    ///
    /// Equivalent to calling [`reset`](Self::reset) except that no memory is
    /// touched.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    /// Creates a CPU in the reset state with the given configuration.
    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            pc: RESET_VECTOR,
            sp: 0x00,
            a: 0x00,
            x: 0x00,
            y: 0x00,
            status: StatusFlags::new(),
            abr: 0,
            cycles: 0,
            page_crossed: false,
            config,
        }
    }

    /// Power-on reset.
    ///
    /// Zeroes every memory cell, sets PC to 0xFFFC and clears SP, A, X, Y,
    /// ABR, all flags and the cycle counter. The configuration is kept.
    ///
    /// The reset vector is not dereferenced: the first instruction is fetched
    /// from 0xFFFC itself, so the caller places a jump there after resetting.
    pub fn reset<M: MemoryBus>(&mut self, memory: &mut M) {
        memory.init();
        *self = Self::with_config(self.config);
        debug!("reset: PC=${:04X}", self.pc);
    }

    /// Executes one instruction.
    ///
    /// Fetches the opcode at PC, resolves the addressing mode, applies the
    /// effect and updates flags. PC ends past the instruction (or at the jump
    /// target) and the cycle counter has grown by one per memory access.
    ///
    /// # Returns
    ///
    /// - `Ok(opcode)` for the instruction that ran
    /// - `Err(ExecutionError)` if the byte is illegal or not implemented yet.
    ///   This is a report, not a failure: only the opcode fetch took place
    ///   (PC + 1, one cycle) and the CPU can keep stepping.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{ExecutionError, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(&mut memory);
    /// memory.write(0xFFFC, 0xEA); // NOP, enumerated but not implemented
    ///
    /// match cpu.execute(&mut memory) {
    ///     Err(ExecutionError::UnimplementedOpcode { address, .. }) => {
    ///         assert_eq!(address, 0xFFFC);
    ///     }
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// assert_eq!(cpu.pc(), 0xFFFD);
    /// assert_eq!(cpu.cycles(), 1);
    /// ```
    pub fn execute<M: MemoryBus>(&mut self, memory: &mut M) -> Result<Opcode, ExecutionError> {
        let address = self.pc;
        let byte = self.fetch_byte(memory);

        let Some(opcode) = Opcode::from_byte(byte) else {
            warn!("illegal opcode ${byte:02X} at ${address:04X}, skipped");
            return Err(ExecutionError::IllegalOpcode {
                opcode: byte,
                address,
            });
        };

        if !opcode.is_implemented() {
            warn!("unimplemented opcode {opcode} at ${address:04X}, skipped");
            return Err(ExecutionError::UnimplementedOpcode { opcode, address });
        }

        self.page_crossed = false;
        match opcode.mnemonic() {
            Mnemonic::Lda => load_store::execute_lda(self, memory, opcode),
            Mnemonic::Ldx => load_store::execute_ldx(self, memory, opcode),
            Mnemonic::Ldy => load_store::execute_ldy(self, memory, opcode),
            Mnemonic::Jmp => control::execute_jmp(self, memory, opcode),
            _ => {
                warn!("unimplemented opcode {opcode} at ${address:04X}, skipped");
                return Err(ExecutionError::UnimplementedOpcode { opcode, address });
            }
        }

        trace!(
            "${address:04X}  {opcode}  A={:02X} X={:02X} Y={:02X} P={:02X} PC=${:04X} cycles={}",
            self.a,
            self.x,
            self.y,
            self.status.to_byte(),
            self.pc,
            self.cycles
        );

        Ok(opcode)
    }

    /// Runs the CPU for at least `cycle_budget` cycles.
    ///
    /// Illegal and unimplemented opcodes are logged and skipped; they never
    /// stop the run. Every step consumes at least the opcode fetch, so the
    /// loop always terminates. Returns the cycles actually consumed, which may
    /// overshoot the budget by part of an instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(&mut memory);
    ///
    /// // JMP $FFFC: a 3-cycle loop on itself
    /// memory.load(0xFFFC, &[0x4C, 0xFC, 0xFF]);
    ///
    /// assert_eq!(cpu.run_for_cycles(&mut memory, 9), 9);
    /// assert_eq!(cpu.pc(), 0xFFFC);
    /// ```
    pub fn run_for_cycles<M: MemoryBus>(&mut self, memory: &mut M, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);
        let mut skipped = 0u64;

        while self.cycles < target_cycles {
            if self.execute(memory).is_err() {
                skipped += 1;
            }
        }

        let consumed = self.cycles - start_cycles;
        debug!("ran {consumed} cycles, {skipped} opcodes skipped");
        consumed
    }

    // ========== Fetch / Read Primitives ==========

    /// Reads the instruction-stream byte at PC, advances PC and charges one
    /// cycle.
    pub fn fetch_byte<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        let data = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        self.cycles += 1;
        data
    }

    /// Two [`fetch_byte`](Self::fetch_byte) calls, low byte first.
    pub fn fetch_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let low = u16::from(self.fetch_byte(memory));
        let high = u16::from(self.fetch_byte(memory));
        low | (high << 8)
    }

    /// Reads the byte at `addr` without touching PC; charges one cycle.
    pub fn read_byte<M: MemoryBus>(&mut self, memory: &M, addr: u16) -> u8 {
        self.cycles += 1;
        memory.read(addr)
    }

    /// Reads a little-endian word from `addr` and `addr + 1` (wrapping past
    /// 0xFFFF); charges two cycles.
    pub fn read_word<M: MemoryBus>(&mut self, memory: &M, addr: u16) -> u16 {
        let low = u16::from(self.read_byte(memory, addr));
        let high = u16::from(self.read_byte(memory, addr.wrapping_add(1)));
        low | (high << 8)
    }

    /// Word read with the NMOS page-wrap bug: the high byte address keeps the
    /// page of `addr`.
    fn read_word_page_wrapped<M: MemoryBus>(&mut self, memory: &M, addr: u16) -> u16 {
        let high_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
        let low = u16::from(self.read_byte(memory, addr));
        let high = u16::from(self.read_byte(memory, high_addr));
        low | (high << 8)
    }

    /// Pointer read for (zp,X) and (zp),Y; both bytes stay in the zero page.
    fn read_zero_page_pointer<M: MemoryBus>(&mut self, memory: &M, zp: u8) -> u16 {
        let low = u16::from(self.read_byte(memory, u16::from(zp)));
        let high = u16::from(self.read_byte(memory, u16::from(zp.wrapping_add(1))));
        low | (high << 8)
    }

    // ========== Addressing ==========

    /// Operand value for a read instruction: the immediate byte itself, or the
    /// byte at the resolved effective address.
    pub(crate) fn load_operand<M: MemoryBus>(&mut self, memory: &M, mode: AddressingMode) -> u8 {
        if mode == AddressingMode::Immediate {
            return self.fetch_byte(memory);
        }
        let addr = self.resolve_address(memory, mode);
        self.read_byte(memory, addr)
    }

    /// Resolves the effective address for `mode` into ABR and returns it.
    ///
    /// Operand bytes are fetched from the instruction stream; pointer bytes
    /// are read through [`read_byte`](Self::read_byte). Nothing reads or
    /// writes through ABR until this returns.
    ///
    /// # Panics
    ///
    /// On modes without an effective address (Implicit, Accumulator,
    /// Immediate, Relative). Dispatch never routes those here.
    pub(crate) fn resolve_address<M: MemoryBus>(&mut self, memory: &M, mode: AddressingMode) -> u16 {
        debug_assert!(mode.has_effective_address(), "{mode:?} has no effective address");
        match mode {
            AddressingMode::ZeroPage => {
                self.abr = u32::from(self.fetch_byte(memory)) & 0xFF;
            }
            AddressingMode::ZeroPageX => self.resolve_zero_page_indexed(memory, self.x),
            AddressingMode::ZeroPageY => self.resolve_zero_page_indexed(memory, self.y),
            AddressingMode::Absolute => {
                self.abr = u32::from(self.fetch_word(memory));
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(memory);
                self.index_absolute(base, self.x);
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(memory);
                self.index_absolute(base, self.y);
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word(memory);
                let target = match self.config.indirect_jump {
                    IndirectJump::Linear => self.read_word(memory, pointer),
                    IndirectJump::PageWrap => self.read_word_page_wrapped(memory, pointer),
                };
                self.abr = u32::from(target);
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte(memory);
                // Index addition
                self.cycles += 1;
                let target = self.read_zero_page_pointer(memory, zp.wrapping_add(self.x));
                self.abr = u32::from(target);
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte(memory);
                let base = self.read_zero_page_pointer(memory, zp);
                self.index_absolute(base, self.y);
            }
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => {
                unreachable!("{mode:?} has no effective address")
            }
        }

        self.abr as u16
    }

    fn resolve_zero_page_indexed<M: MemoryBus>(&mut self, memory: &M, index: u8) {
        let base = self.fetch_byte(memory);
        self.abr = (u32::from(base) & 0xFF) + u32::from(index);
        // Index addition
        self.cycles += 1;
        if self.config.zero_page_indexing == ZeroPageIndexing::Wrapped {
            self.abr &= 0xFF;
        }
    }

    fn index_absolute(&mut self, base: u16, index: u8) {
        self.abr = u32::from(base) + u32::from(index);
        self.page_crossed = self.abr & 0xFF00 != u32::from(base & 0xFF00);
        if self.page_crossed && self.config.page_cross_penalty {
            self.cycles += 1;
        }
        self.abr &= 0xFFFF;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the effective-address register.
    pub fn abr(&self) -> u32 {
        self.abr
    }

    /// Returns the number of memory-access cycles since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether the last indexed address resolution crossed a page.
    pub fn page_crossed(&self) -> bool {
        self.page_crossed
    }

    /// Returns the addressing-quirk configuration.
    pub fn config(&self) -> CpuConfig {
        self.config
    }

    /// Returns a copy of the individual status flags.
    pub fn flags(&self) -> StatusFlags {
        self.status
    }

    /// Returns the status register packed as NV-BDIZC (bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.status.to_byte()
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.overflow
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.break_command
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.carry
    }

    // ========== Setters (test harnesses, debuggers) ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces all flags from a packed NV-BDIZC byte.
    pub fn set_status(&mut self, value: u8) {
        self.status = StatusFlags::from_byte(value);
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.status.negative = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.status.overflow = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.status.break_command = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.status.decimal = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.status.interrupt_disable = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.status.zero = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.status.carry = value;
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup() -> (CPU, FlatMemory) {
        let mut memory = FlatMemory::new();
        let mut cpu = CPU::new();
        cpu.reset(&mut memory);
        (cpu, memory)
    }

    #[test]
    fn test_reset_state() {
        let (cpu, memory) = setup();

        assert_eq!(cpu.pc(), 0xFFFC);
        assert_eq!(cpu.sp(), 0x00);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.abr(), 0);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.flags(), StatusFlags::new());
        assert!(memory.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut memory = FlatMemory::new();
        let mut cpu = CPU::with_config(CpuConfig::nmos());
        cpu.set_a(0x12);
        cpu.reset(&mut memory);

        assert_eq!(cpu.config(), CpuConfig::nmos());
        assert_eq!(cpu.a(), 0x00);
    }

    #[test]
    fn test_fetch_byte_advances_pc_and_cycles() {
        let (mut cpu, mut memory) = setup();
        memory.write(0xFFFC, 0x42);

        assert_eq!(cpu.fetch_byte(&memory), 0x42);
        assert_eq!(cpu.pc(), 0xFFFD);
        assert_eq!(cpu.cycles(), 1);
    }

    #[test]
    fn test_fetch_word_little_endian() {
        let (mut cpu, mut memory) = setup();
        memory.write(0xFFFC, 0x34);
        memory.write(0xFFFD, 0x12);

        assert_eq!(cpu.fetch_word(&memory), 0x1234);
        assert_eq!(cpu.pc(), 0xFFFE);
        assert_eq!(cpu.cycles(), 2);
    }

    #[test]
    fn test_fetch_wraps_pc() {
        let (mut cpu, mut memory) = setup();
        memory.write(0xFFFF, 0x11);
        memory.write(0x0000, 0x22);
        cpu.set_pc(0xFFFF);

        assert_eq!(cpu.fetch_word(&memory), 0x2211);
        assert_eq!(cpu.pc(), 0x0001);
    }

    #[test]
    fn test_read_word_does_not_move_pc() {
        let (mut cpu, mut memory) = setup();
        memory.write(0x0200, 0x34);
        memory.write(0x0201, 0x12);

        assert_eq!(cpu.read_word(&memory, 0x0200), 0x1234);
        assert_eq!(cpu.pc(), 0xFFFC);
        assert_eq!(cpu.cycles(), 2);
    }

    #[test]
    fn test_read_word_page_wrapped() {
        let (mut cpu, mut memory) = setup();
        memory.write(0x10FF, 0x34);
        memory.write(0x1000, 0x12);
        memory.write(0x1100, 0x56);

        assert_eq!(cpu.read_word_page_wrapped(&memory, 0x10FF), 0x1234);
        assert_eq!(cpu.read_word(&memory, 0x10FF), 0x5634);
    }

    #[test]
    fn test_index_absolute_detects_page_cross() {
        let mut cpu = CPU::new();

        cpu.index_absolute(0x12F0, 0x20);
        assert!(cpu.page_crossed());
        assert_eq!(cpu.abr(), 0x1310);
        assert_eq!(cpu.cycles(), 0);

        cpu.index_absolute(0x1200, 0x20);
        assert!(!cpu.page_crossed());
        assert_eq!(cpu.abr(), 0x1220);
    }

    #[test]
    fn test_index_absolute_masks_after_overflow() {
        let mut cpu = CPU::with_config(CpuConfig::nmos());

        cpu.index_absolute(0xFFF0, 0x20);
        assert!(cpu.page_crossed());
        assert_eq!(cpu.abr(), 0x0010);
        assert_eq!(cpu.cycles(), 1); // penalty enabled
    }

    #[test]
    fn test_execute_illegal_opcode() {
        let (mut cpu, mut memory) = setup();
        memory.write(0xFFFC, 0x02);

        let result = cpu.execute(&mut memory);

        assert_eq!(
            result,
            Err(ExecutionError::IllegalOpcode {
                opcode: 0x02,
                address: 0xFFFC
            })
        );
        assert_eq!(cpu.pc(), 0xFFFD);
        assert_eq!(cpu.cycles(), 1);
    }

    #[test]
    fn test_status_register_packing() {
        let mut cpu = CPU::new();
        cpu.set_flag_n(true);
        cpu.set_flag_c(true);

        assert_eq!(cpu.status(), 0b1010_0001);

        cpu.set_status(0b0100_0010);
        assert!(cpu.flag_v());
        assert!(cpu.flag_z());
        assert!(!cpu.flag_n());
        assert!(!cpu.flag_c());
    }

    #[test]
    fn test_resolve_address_covers_every_effective_address_mode() {
        let modes = [
            AddressingMode::ZeroPage,
            AddressingMode::ZeroPageX,
            AddressingMode::ZeroPageY,
            AddressingMode::Absolute,
            AddressingMode::AbsoluteX,
            AddressingMode::AbsoluteY,
            AddressingMode::Indirect,
            AddressingMode::IndirectX,
            AddressingMode::IndirectY,
        ];
        for mode in modes {
            assert!(mode.has_effective_address());
            let (mut cpu, memory) = setup();
            cpu.set_pc(0x0200);
            // Zeroed memory: every operand and pointer is 0
            assert_eq!(cpu.resolve_address(&memory, mode), 0x0000, "{mode:?}");
        }
    }

    #[test]
    #[should_panic(expected = "has no effective address")]
    fn test_resolve_address_rejects_immediate() {
        let (mut cpu, memory) = setup();
        cpu.resolve_address(&memory, AddressingMode::Immediate);
    }
}
