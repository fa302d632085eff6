//! # Addressing Modes
//!
//! The 13 addressing modes of the NMOS 6502. A mode decides how many operand
//! bytes follow the opcode and how the effective address is formed from them.
//! Resolution itself lives in [`CPU`](crate::CPU), which charges the memory
//! accesses it performs.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A
    Accumulator,

    /// The operand is the next instruction byte itself.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address plus X.
    ///
    /// Whether the sum is folded back into the zero page depends on
    /// [`ZeroPageIndexing`](crate::ZeroPageIndexing).
    ZeroPageX,

    /// Zero page address plus Y. Only LDX and STX use it.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address plus X. Crossing a page is detected and recorded.
    AbsoluteX,

    /// 16-bit address plus Y. Crossing a page is detected and recorded.
    AbsoluteY,

    /// 16-bit pointer to a 16-bit target. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: pointer at (zp + X) within the zero page.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: pointer at zp, then plus Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Short assembler-style notation used when formatting opcodes.
    pub const fn notation(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "",
            AddressingMode::Accumulator => "A",
            AddressingMode::Immediate => "#imm",
            AddressingMode::ZeroPage => "zp",
            AddressingMode::ZeroPageX => "zp,X",
            AddressingMode::ZeroPageY => "zp,Y",
            AddressingMode::Relative => "rel",
            AddressingMode::Absolute => "abs",
            AddressingMode::AbsoluteX => "abs,X",
            AddressingMode::AbsoluteY => "abs,Y",
            AddressingMode::Indirect => "(abs)",
            AddressingMode::IndirectX => "(zp,X)",
            AddressingMode::IndirectY => "(zp),Y",
        }
    }

    /// Whether the mode resolves to an effective memory address.
    pub const fn has_effective_address(self) -> bool {
        !matches!(
            self,
            AddressingMode::Implicit
                | AddressingMode::Accumulator
                | AddressingMode::Immediate
                | AddressingMode::Relative
        )
    }
}
