//! # Opcode Table
//!
//! The closed set of documented NMOS 6502 opcodes. Every documented
//! mnemonic/addressing-mode pair owns exactly one byte value, whether or not the
//! execute engine has logic for it yet. Adding an instruction therefore only
//! adds a dispatch arm; it never renumbers an existing code.
//!
//! Undocumented byte values (105 of them) are not part of the enumeration and
//! decode to `None`.

use std::fmt;

use crate::addressing::AddressingMode;

/// Instruction mnemonic, independent of addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Three-letter assembler name (e.g. `"LDA"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented 6502 opcode.
///
/// The discriminant of each variant is its byte encoding, so `opcode as u8`
/// (or [`Opcode::byte`]) gives the value stored in memory.
///
/// Variants of mnemonics that exist in a single addressing mode carry the bare
/// mnemonic name (`Brk`, `Bcc`, `Jsr`); all others are suffixed with the mode.
///
/// # Examples
///
/// ```
/// use core6502::{AddressingMode, Mnemonic, Opcode};
///
/// let op = Opcode::from_byte(0xB5).unwrap();
/// assert_eq!(op, Opcode::LdaZeroPageX);
/// assert_eq!(op.mnemonic(), Mnemonic::Lda);
/// assert_eq!(op.addressing_mode(), AddressingMode::ZeroPageX);
/// assert_eq!(op.size_bytes(), 2);
///
/// assert_eq!(Opcode::from_byte(0x02), None); // undocumented
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    AdcImmediate = 0x69,
    AdcZeroPage = 0x65,
    AdcZeroPageX = 0x75,
    AdcAbsolute = 0x6D,
    AdcAbsoluteX = 0x7D,
    AdcAbsoluteY = 0x79,
    AdcIndirectX = 0x61,
    AdcIndirectY = 0x71,

    AndImmediate = 0x29,
    AndZeroPage = 0x25,
    AndZeroPageX = 0x35,
    AndAbsolute = 0x2D,
    AndAbsoluteX = 0x3D,
    AndAbsoluteY = 0x39,
    AndIndirectX = 0x21,
    AndIndirectY = 0x31,

    AslAccumulator = 0x0A,
    AslZeroPage = 0x06,
    AslZeroPageX = 0x16,
    AslAbsolute = 0x0E,
    AslAbsoluteX = 0x1E,

    Bcc = 0x90,

    Bcs = 0xB0,

    Beq = 0xF0,

    BitZeroPage = 0x24,
    BitAbsolute = 0x2C,

    Bmi = 0x30,

    Bne = 0xD0,

    Bpl = 0x10,

    Brk = 0x00,

    Bvc = 0x50,

    Bvs = 0x70,

    Clc = 0x18,

    Cld = 0xD8,

    Cli = 0x58,

    Clv = 0xB8,

    CmpImmediate = 0xC9,
    CmpZeroPage = 0xC5,
    CmpZeroPageX = 0xD5,
    CmpAbsolute = 0xCD,
    CmpAbsoluteX = 0xDD,
    CmpAbsoluteY = 0xD9,
    CmpIndirectX = 0xC1,
    CmpIndirectY = 0xD1,

    CpxImmediate = 0xE0,
    CpxZeroPage = 0xE4,
    CpxAbsolute = 0xEC,

    CpyImmediate = 0xC0,
    CpyZeroPage = 0xC4,
    CpyAbsolute = 0xCC,

    DecZeroPage = 0xC6,
    DecZeroPageX = 0xD6,
    DecAbsolute = 0xCE,
    DecAbsoluteX = 0xDE,

    Dex = 0xCA,

    Dey = 0x88,

    EorImmediate = 0x49,
    EorZeroPage = 0x45,
    EorZeroPageX = 0x55,
    EorAbsolute = 0x4D,
    EorAbsoluteX = 0x5D,
    EorAbsoluteY = 0x59,
    EorIndirectX = 0x41,
    EorIndirectY = 0x51,

    IncZeroPage = 0xE6,
    IncZeroPageX = 0xF6,
    IncAbsolute = 0xEE,
    IncAbsoluteX = 0xFE,

    Inx = 0xE8,

    Iny = 0xC8,

    JmpAbsolute = 0x4C,
    JmpIndirect = 0x6C,

    Jsr = 0x20,

    LdaImmediate = 0xA9,
    LdaZeroPage = 0xA5,
    LdaZeroPageX = 0xB5,
    LdaAbsolute = 0xAD,
    LdaAbsoluteX = 0xBD,
    LdaAbsoluteY = 0xB9,
    LdaIndirectX = 0xA1,
    LdaIndirectY = 0xB1,

    LdxImmediate = 0xA2,
    LdxZeroPage = 0xA6,
    LdxZeroPageY = 0xB6,
    LdxAbsolute = 0xAE,
    LdxAbsoluteY = 0xBE,

    LdyImmediate = 0xA0,
    LdyZeroPage = 0xA4,
    LdyZeroPageX = 0xB4,
    LdyAbsolute = 0xAC,
    LdyAbsoluteX = 0xBC,

    LsrAccumulator = 0x4A,
    LsrZeroPage = 0x46,
    LsrZeroPageX = 0x56,
    LsrAbsolute = 0x4E,
    LsrAbsoluteX = 0x5E,

    Nop = 0xEA,

    OraImmediate = 0x09,
    OraZeroPage = 0x05,
    OraZeroPageX = 0x15,
    OraAbsolute = 0x0D,
    OraAbsoluteX = 0x1D,
    OraAbsoluteY = 0x19,
    OraIndirectX = 0x01,
    OraIndirectY = 0x11,

    Pha = 0x48,

    Php = 0x08,

    Pla = 0x68,

    Plp = 0x28,

    RolAccumulator = 0x2A,
    RolZeroPage = 0x26,
    RolZeroPageX = 0x36,
    RolAbsolute = 0x2E,
    RolAbsoluteX = 0x3E,

    RorAccumulator = 0x6A,
    RorZeroPage = 0x66,
    RorZeroPageX = 0x76,
    RorAbsolute = 0x6E,
    RorAbsoluteX = 0x7E,

    Rti = 0x40,

    Rts = 0x60,

    SbcImmediate = 0xE9,
    SbcZeroPage = 0xE5,
    SbcZeroPageX = 0xF5,
    SbcAbsolute = 0xED,
    SbcAbsoluteX = 0xFD,
    SbcAbsoluteY = 0xF9,
    SbcIndirectX = 0xE1,
    SbcIndirectY = 0xF1,

    Sec = 0x38,

    Sed = 0xF8,

    Sei = 0x78,

    StaZeroPage = 0x85,
    StaZeroPageX = 0x95,
    StaAbsolute = 0x8D,
    StaAbsoluteX = 0x9D,
    StaAbsoluteY = 0x99,
    StaIndirectX = 0x81,
    StaIndirectY = 0x91,

    StxZeroPage = 0x86,
    StxZeroPageY = 0x96,
    StxAbsolute = 0x8E,

    StyZeroPage = 0x84,
    StyZeroPageX = 0x94,
    StyAbsolute = 0x8C,

    Tax = 0xAA,

    Tay = 0xA8,

    Tsx = 0xBA,

    Txa = 0x8A,

    Txs = 0x9A,

    Tya = 0x98,
}

/// Static facts about one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Documented cycle cost, excluding page-crossing penalties.
    ///
    /// For the implemented loads and jumps this equals the number of memory
    /// accesses the execute engine charges.
    pub base_cycles: u8,

    /// Total size in bytes, opcode included (1-3).
    pub size_bytes: u8,

    /// Whether the execute engine has logic for this opcode.
    pub implemented: bool,
}

impl Opcode {
    /// Every documented opcode, grouped by mnemonic.
    pub const ALL: [Opcode; 151] = [
        Opcode::AdcImmediate,
        Opcode::AdcZeroPage,
        Opcode::AdcZeroPageX,
        Opcode::AdcAbsolute,
        Opcode::AdcAbsoluteX,
        Opcode::AdcAbsoluteY,
        Opcode::AdcIndirectX,
        Opcode::AdcIndirectY,
        Opcode::AndImmediate,
        Opcode::AndZeroPage,
        Opcode::AndZeroPageX,
        Opcode::AndAbsolute,
        Opcode::AndAbsoluteX,
        Opcode::AndAbsoluteY,
        Opcode::AndIndirectX,
        Opcode::AndIndirectY,
        Opcode::AslAccumulator,
        Opcode::AslZeroPage,
        Opcode::AslZeroPageX,
        Opcode::AslAbsolute,
        Opcode::AslAbsoluteX,
        Opcode::Bcc,
        Opcode::Bcs,
        Opcode::Beq,
        Opcode::BitZeroPage,
        Opcode::BitAbsolute,
        Opcode::Bmi,
        Opcode::Bne,
        Opcode::Bpl,
        Opcode::Brk,
        Opcode::Bvc,
        Opcode::Bvs,
        Opcode::Clc,
        Opcode::Cld,
        Opcode::Cli,
        Opcode::Clv,
        Opcode::CmpImmediate,
        Opcode::CmpZeroPage,
        Opcode::CmpZeroPageX,
        Opcode::CmpAbsolute,
        Opcode::CmpAbsoluteX,
        Opcode::CmpAbsoluteY,
        Opcode::CmpIndirectX,
        Opcode::CmpIndirectY,
        Opcode::CpxImmediate,
        Opcode::CpxZeroPage,
        Opcode::CpxAbsolute,
        Opcode::CpyImmediate,
        Opcode::CpyZeroPage,
        Opcode::CpyAbsolute,
        Opcode::DecZeroPage,
        Opcode::DecZeroPageX,
        Opcode::DecAbsolute,
        Opcode::DecAbsoluteX,
        Opcode::Dex,
        Opcode::Dey,
        Opcode::EorImmediate,
        Opcode::EorZeroPage,
        Opcode::EorZeroPageX,
        Opcode::EorAbsolute,
        Opcode::EorAbsoluteX,
        Opcode::EorAbsoluteY,
        Opcode::EorIndirectX,
        Opcode::EorIndirectY,
        Opcode::IncZeroPage,
        Opcode::IncZeroPageX,
        Opcode::IncAbsolute,
        Opcode::IncAbsoluteX,
        Opcode::Inx,
        Opcode::Iny,
        Opcode::JmpAbsolute,
        Opcode::JmpIndirect,
        Opcode::Jsr,
        Opcode::LdaImmediate,
        Opcode::LdaZeroPage,
        Opcode::LdaZeroPageX,
        Opcode::LdaAbsolute,
        Opcode::LdaAbsoluteX,
        Opcode::LdaAbsoluteY,
        Opcode::LdaIndirectX,
        Opcode::LdaIndirectY,
        Opcode::LdxImmediate,
        Opcode::LdxZeroPage,
        Opcode::LdxZeroPageY,
        Opcode::LdxAbsolute,
        Opcode::LdxAbsoluteY,
        Opcode::LdyImmediate,
        Opcode::LdyZeroPage,
        Opcode::LdyZeroPageX,
        Opcode::LdyAbsolute,
        Opcode::LdyAbsoluteX,
        Opcode::LsrAccumulator,
        Opcode::LsrZeroPage,
        Opcode::LsrZeroPageX,
        Opcode::LsrAbsolute,
        Opcode::LsrAbsoluteX,
        Opcode::Nop,
        Opcode::OraImmediate,
        Opcode::OraZeroPage,
        Opcode::OraZeroPageX,
        Opcode::OraAbsolute,
        Opcode::OraAbsoluteX,
        Opcode::OraAbsoluteY,
        Opcode::OraIndirectX,
        Opcode::OraIndirectY,
        Opcode::Pha,
        Opcode::Php,
        Opcode::Pla,
        Opcode::Plp,
        Opcode::RolAccumulator,
        Opcode::RolZeroPage,
        Opcode::RolZeroPageX,
        Opcode::RolAbsolute,
        Opcode::RolAbsoluteX,
        Opcode::RorAccumulator,
        Opcode::RorZeroPage,
        Opcode::RorZeroPageX,
        Opcode::RorAbsolute,
        Opcode::RorAbsoluteX,
        Opcode::Rti,
        Opcode::Rts,
        Opcode::SbcImmediate,
        Opcode::SbcZeroPage,
        Opcode::SbcZeroPageX,
        Opcode::SbcAbsolute,
        Opcode::SbcAbsoluteX,
        Opcode::SbcAbsoluteY,
        Opcode::SbcIndirectX,
        Opcode::SbcIndirectY,
        Opcode::Sec,
        Opcode::Sed,
        Opcode::Sei,
        Opcode::StaZeroPage,
        Opcode::StaZeroPageX,
        Opcode::StaAbsolute,
        Opcode::StaAbsoluteX,
        Opcode::StaAbsoluteY,
        Opcode::StaIndirectX,
        Opcode::StaIndirectY,
        Opcode::StxZeroPage,
        Opcode::StxZeroPageY,
        Opcode::StxAbsolute,
        Opcode::StyZeroPage,
        Opcode::StyZeroPageX,
        Opcode::StyAbsolute,
        Opcode::Tax,
        Opcode::Tay,
        Opcode::Tsx,
        Opcode::Txa,
        Opcode::Txs,
        Opcode::Tya,
    ];

    /// Decodes a byte fetched from the instruction stream.
    ///
    /// Returns `None` for the undocumented byte values.
    pub const fn from_byte(byte: u8) -> Option<Opcode> {
        DECODE_TABLE[byte as usize]
    }

    /// The byte encoding of this opcode.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    pub const fn mnemonic(self) -> Mnemonic {
        self.info().0
    }

    pub const fn addressing_mode(self) -> AddressingMode {
        self.info().1
    }

    /// Documented base cycle count.
    pub const fn base_cycles(self) -> u8 {
        self.info().2
    }

    /// Instruction length including the opcode byte.
    pub const fn size_bytes(self) -> u8 {
        1 + self.addressing_mode().operand_bytes()
    }

    /// Whether [`CPU::execute`](crate::CPU::execute) carries out this opcode.
    ///
    /// Loads (LDA, LDX, LDY) in every addressing mode and both JMP forms are
    /// implemented; everything else is reported and skipped.
    pub const fn is_implemented(self) -> bool {
        matches!(
            self.mnemonic(),
            Mnemonic::Lda | Mnemonic::Ldx | Mnemonic::Ldy | Mnemonic::Jmp
        )
    }

    /// All static facts about this opcode in one struct.
    pub const fn metadata(self) -> OpcodeMetadata {
        OpcodeMetadata {
            mnemonic: self.mnemonic(),
            addressing_mode: self.addressing_mode(),
            base_cycles: self.base_cycles(),
            size_bytes: self.size_bytes(),
            implemented: self.is_implemented(),
        }
    }

    const fn info(self) -> (Mnemonic, AddressingMode, u8) {
        use AddressingMode::*;

        match self {
            Opcode::AdcImmediate => (Mnemonic::Adc, Immediate, 2),
            Opcode::AdcZeroPage => (Mnemonic::Adc, ZeroPage, 3),
            Opcode::AdcZeroPageX => (Mnemonic::Adc, ZeroPageX, 4),
            Opcode::AdcAbsolute => (Mnemonic::Adc, Absolute, 4),
            Opcode::AdcAbsoluteX => (Mnemonic::Adc, AbsoluteX, 4),
            Opcode::AdcAbsoluteY => (Mnemonic::Adc, AbsoluteY, 4),
            Opcode::AdcIndirectX => (Mnemonic::Adc, IndirectX, 6),
            Opcode::AdcIndirectY => (Mnemonic::Adc, IndirectY, 5),
            Opcode::AndImmediate => (Mnemonic::And, Immediate, 2),
            Opcode::AndZeroPage => (Mnemonic::And, ZeroPage, 3),
            Opcode::AndZeroPageX => (Mnemonic::And, ZeroPageX, 4),
            Opcode::AndAbsolute => (Mnemonic::And, Absolute, 4),
            Opcode::AndAbsoluteX => (Mnemonic::And, AbsoluteX, 4),
            Opcode::AndAbsoluteY => (Mnemonic::And, AbsoluteY, 4),
            Opcode::AndIndirectX => (Mnemonic::And, IndirectX, 6),
            Opcode::AndIndirectY => (Mnemonic::And, IndirectY, 5),
            Opcode::AslAccumulator => (Mnemonic::Asl, Accumulator, 2),
            Opcode::AslZeroPage => (Mnemonic::Asl, ZeroPage, 5),
            Opcode::AslZeroPageX => (Mnemonic::Asl, ZeroPageX, 6),
            Opcode::AslAbsolute => (Mnemonic::Asl, Absolute, 6),
            Opcode::AslAbsoluteX => (Mnemonic::Asl, AbsoluteX, 7),
            Opcode::Bcc => (Mnemonic::Bcc, Relative, 2),
            Opcode::Bcs => (Mnemonic::Bcs, Relative, 2),
            Opcode::Beq => (Mnemonic::Beq, Relative, 2),
            Opcode::BitZeroPage => (Mnemonic::Bit, ZeroPage, 3),
            Opcode::BitAbsolute => (Mnemonic::Bit, Absolute, 4),
            Opcode::Bmi => (Mnemonic::Bmi, Relative, 2),
            Opcode::Bne => (Mnemonic::Bne, Relative, 2),
            Opcode::Bpl => (Mnemonic::Bpl, Relative, 2),
            Opcode::Brk => (Mnemonic::Brk, Implicit, 7),
            Opcode::Bvc => (Mnemonic::Bvc, Relative, 2),
            Opcode::Bvs => (Mnemonic::Bvs, Relative, 2),
            Opcode::Clc => (Mnemonic::Clc, Implicit, 2),
            Opcode::Cld => (Mnemonic::Cld, Implicit, 2),
            Opcode::Cli => (Mnemonic::Cli, Implicit, 2),
            Opcode::Clv => (Mnemonic::Clv, Implicit, 2),
            Opcode::CmpImmediate => (Mnemonic::Cmp, Immediate, 2),
            Opcode::CmpZeroPage => (Mnemonic::Cmp, ZeroPage, 3),
            Opcode::CmpZeroPageX => (Mnemonic::Cmp, ZeroPageX, 4),
            Opcode::CmpAbsolute => (Mnemonic::Cmp, Absolute, 4),
            Opcode::CmpAbsoluteX => (Mnemonic::Cmp, AbsoluteX, 4),
            Opcode::CmpAbsoluteY => (Mnemonic::Cmp, AbsoluteY, 4),
            Opcode::CmpIndirectX => (Mnemonic::Cmp, IndirectX, 6),
            Opcode::CmpIndirectY => (Mnemonic::Cmp, IndirectY, 5),
            Opcode::CpxImmediate => (Mnemonic::Cpx, Immediate, 2),
            Opcode::CpxZeroPage => (Mnemonic::Cpx, ZeroPage, 3),
            Opcode::CpxAbsolute => (Mnemonic::Cpx, Absolute, 4),
            Opcode::CpyImmediate => (Mnemonic::Cpy, Immediate, 2),
            Opcode::CpyZeroPage => (Mnemonic::Cpy, ZeroPage, 3),
            Opcode::CpyAbsolute => (Mnemonic::Cpy, Absolute, 4),
            Opcode::DecZeroPage => (Mnemonic::Dec, ZeroPage, 5),
            Opcode::DecZeroPageX => (Mnemonic::Dec, ZeroPageX, 6),
            Opcode::DecAbsolute => (Mnemonic::Dec, Absolute, 6),
            Opcode::DecAbsoluteX => (Mnemonic::Dec, AbsoluteX, 7),
            Opcode::Dex => (Mnemonic::Dex, Implicit, 2),
            Opcode::Dey => (Mnemonic::Dey, Implicit, 2),
            Opcode::EorImmediate => (Mnemonic::Eor, Immediate, 2),
            Opcode::EorZeroPage => (Mnemonic::Eor, ZeroPage, 3),
            Opcode::EorZeroPageX => (Mnemonic::Eor, ZeroPageX, 4),
            Opcode::EorAbsolute => (Mnemonic::Eor, Absolute, 4),
            Opcode::EorAbsoluteX => (Mnemonic::Eor, AbsoluteX, 4),
            Opcode::EorAbsoluteY => (Mnemonic::Eor, AbsoluteY, 4),
            Opcode::EorIndirectX => (Mnemonic::Eor, IndirectX, 6),
            Opcode::EorIndirectY => (Mnemonic::Eor, IndirectY, 5),
            Opcode::IncZeroPage => (Mnemonic::Inc, ZeroPage, 5),
            Opcode::IncZeroPageX => (Mnemonic::Inc, ZeroPageX, 6),
            Opcode::IncAbsolute => (Mnemonic::Inc, Absolute, 6),
            Opcode::IncAbsoluteX => (Mnemonic::Inc, AbsoluteX, 7),
            Opcode::Inx => (Mnemonic::Inx, Implicit, 2),
            Opcode::Iny => (Mnemonic::Iny, Implicit, 2),
            Opcode::JmpAbsolute => (Mnemonic::Jmp, Absolute, 3),
            Opcode::JmpIndirect => (Mnemonic::Jmp, Indirect, 5),
            Opcode::Jsr => (Mnemonic::Jsr, Absolute, 6),
            Opcode::LdaImmediate => (Mnemonic::Lda, Immediate, 2),
            Opcode::LdaZeroPage => (Mnemonic::Lda, ZeroPage, 3),
            Opcode::LdaZeroPageX => (Mnemonic::Lda, ZeroPageX, 4),
            Opcode::LdaAbsolute => (Mnemonic::Lda, Absolute, 4),
            Opcode::LdaAbsoluteX => (Mnemonic::Lda, AbsoluteX, 4),
            Opcode::LdaAbsoluteY => (Mnemonic::Lda, AbsoluteY, 4),
            Opcode::LdaIndirectX => (Mnemonic::Lda, IndirectX, 6),
            Opcode::LdaIndirectY => (Mnemonic::Lda, IndirectY, 5),
            Opcode::LdxImmediate => (Mnemonic::Ldx, Immediate, 2),
            Opcode::LdxZeroPage => (Mnemonic::Ldx, ZeroPage, 3),
            Opcode::LdxZeroPageY => (Mnemonic::Ldx, ZeroPageY, 4),
            Opcode::LdxAbsolute => (Mnemonic::Ldx, Absolute, 4),
            Opcode::LdxAbsoluteY => (Mnemonic::Ldx, AbsoluteY, 4),
            Opcode::LdyImmediate => (Mnemonic::Ldy, Immediate, 2),
            Opcode::LdyZeroPage => (Mnemonic::Ldy, ZeroPage, 3),
            Opcode::LdyZeroPageX => (Mnemonic::Ldy, ZeroPageX, 4),
            Opcode::LdyAbsolute => (Mnemonic::Ldy, Absolute, 4),
            Opcode::LdyAbsoluteX => (Mnemonic::Ldy, AbsoluteX, 4),
            Opcode::LsrAccumulator => (Mnemonic::Lsr, Accumulator, 2),
            Opcode::LsrZeroPage => (Mnemonic::Lsr, ZeroPage, 5),
            Opcode::LsrZeroPageX => (Mnemonic::Lsr, ZeroPageX, 6),
            Opcode::LsrAbsolute => (Mnemonic::Lsr, Absolute, 6),
            Opcode::LsrAbsoluteX => (Mnemonic::Lsr, AbsoluteX, 7),
            Opcode::Nop => (Mnemonic::Nop, Implicit, 2),
            Opcode::OraImmediate => (Mnemonic::Ora, Immediate, 2),
            Opcode::OraZeroPage => (Mnemonic::Ora, ZeroPage, 3),
            Opcode::OraZeroPageX => (Mnemonic::Ora, ZeroPageX, 4),
            Opcode::OraAbsolute => (Mnemonic::Ora, Absolute, 4),
            Opcode::OraAbsoluteX => (Mnemonic::Ora, AbsoluteX, 4),
            Opcode::OraAbsoluteY => (Mnemonic::Ora, AbsoluteY, 4),
            Opcode::OraIndirectX => (Mnemonic::Ora, IndirectX, 6),
            Opcode::OraIndirectY => (Mnemonic::Ora, IndirectY, 5),
            Opcode::Pha => (Mnemonic::Pha, Implicit, 3),
            Opcode::Php => (Mnemonic::Php, Implicit, 3),
            Opcode::Pla => (Mnemonic::Pla, Implicit, 4),
            Opcode::Plp => (Mnemonic::Plp, Implicit, 4),
            Opcode::RolAccumulator => (Mnemonic::Rol, Accumulator, 2),
            Opcode::RolZeroPage => (Mnemonic::Rol, ZeroPage, 5),
            Opcode::RolZeroPageX => (Mnemonic::Rol, ZeroPageX, 6),
            Opcode::RolAbsolute => (Mnemonic::Rol, Absolute, 6),
            Opcode::RolAbsoluteX => (Mnemonic::Rol, AbsoluteX, 7),
            Opcode::RorAccumulator => (Mnemonic::Ror, Accumulator, 2),
            Opcode::RorZeroPage => (Mnemonic::Ror, ZeroPage, 5),
            Opcode::RorZeroPageX => (Mnemonic::Ror, ZeroPageX, 6),
            Opcode::RorAbsolute => (Mnemonic::Ror, Absolute, 6),
            Opcode::RorAbsoluteX => (Mnemonic::Ror, AbsoluteX, 7),
            Opcode::Rti => (Mnemonic::Rti, Implicit, 6),
            Opcode::Rts => (Mnemonic::Rts, Implicit, 6),
            Opcode::SbcImmediate => (Mnemonic::Sbc, Immediate, 2),
            Opcode::SbcZeroPage => (Mnemonic::Sbc, ZeroPage, 3),
            Opcode::SbcZeroPageX => (Mnemonic::Sbc, ZeroPageX, 4),
            Opcode::SbcAbsolute => (Mnemonic::Sbc, Absolute, 4),
            Opcode::SbcAbsoluteX => (Mnemonic::Sbc, AbsoluteX, 4),
            Opcode::SbcAbsoluteY => (Mnemonic::Sbc, AbsoluteY, 4),
            Opcode::SbcIndirectX => (Mnemonic::Sbc, IndirectX, 6),
            Opcode::SbcIndirectY => (Mnemonic::Sbc, IndirectY, 5),
            Opcode::Sec => (Mnemonic::Sec, Implicit, 2),
            Opcode::Sed => (Mnemonic::Sed, Implicit, 2),
            Opcode::Sei => (Mnemonic::Sei, Implicit, 2),
            Opcode::StaZeroPage => (Mnemonic::Sta, ZeroPage, 3),
            Opcode::StaZeroPageX => (Mnemonic::Sta, ZeroPageX, 4),
            Opcode::StaAbsolute => (Mnemonic::Sta, Absolute, 4),
            Opcode::StaAbsoluteX => (Mnemonic::Sta, AbsoluteX, 5),
            Opcode::StaAbsoluteY => (Mnemonic::Sta, AbsoluteY, 5),
            Opcode::StaIndirectX => (Mnemonic::Sta, IndirectX, 6),
            Opcode::StaIndirectY => (Mnemonic::Sta, IndirectY, 6),
            Opcode::StxZeroPage => (Mnemonic::Stx, ZeroPage, 3),
            Opcode::StxZeroPageY => (Mnemonic::Stx, ZeroPageY, 4),
            Opcode::StxAbsolute => (Mnemonic::Stx, Absolute, 4),
            Opcode::StyZeroPage => (Mnemonic::Sty, ZeroPage, 3),
            Opcode::StyZeroPageX => (Mnemonic::Sty, ZeroPageX, 4),
            Opcode::StyAbsolute => (Mnemonic::Sty, Absolute, 4),
            Opcode::Tax => (Mnemonic::Tax, Implicit, 2),
            Opcode::Tay => (Mnemonic::Tay, Implicit, 2),
            Opcode::Tsx => (Mnemonic::Tsx, Implicit, 2),
            Opcode::Txa => (Mnemonic::Txa, Implicit, 2),
            Opcode::Txs => (Mnemonic::Txs, Implicit, 2),
            Opcode::Tya => (Mnemonic::Tya, Implicit, 2),
        }
    }
}

impl fmt::Display for Opcode {
    /// Formats as `LDA zp,X ($B5)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notation = self.addressing_mode().notation();
        if notation.is_empty() {
            write!(f, "{} (${:02X})", self.mnemonic(), self.byte())
        } else {
            write!(f, "{} {} (${:02X})", self.mnemonic(), notation, self.byte())
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Fails with the original byte when it is not a documented opcode.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Opcode::from_byte(byte).ok_or(byte)
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        opcode.byte()
    }
}

const DECODE_TABLE: [Option<Opcode>; 256] = {
    let mut table = [None; 256];
    let mut i = 0;
    while i < Opcode::ALL.len() {
        let opcode = Opcode::ALL[i];
        table[opcode as usize] = Some(opcode);
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_round_trips_every_documented_opcode() {
        for opcode in Opcode::ALL {
            assert_eq!(Opcode::from_byte(opcode.byte()), Some(opcode));
        }
    }

    #[test]
    fn test_undocumented_count() {
        let undocumented = (0..=255u8)
            .filter(|&b| Opcode::from_byte(b).is_none())
            .count();
        assert_eq!(undocumented, 105);
    }

    #[test]
    fn test_reference_codes() {
        assert_eq!(Opcode::LdaImmediate.byte(), 0xA9);
        assert_eq!(Opcode::LdaZeroPage.byte(), 0xA5);
        assert_eq!(Opcode::LdaZeroPageX.byte(), 0xB5);
        assert_eq!(Opcode::LdaAbsolute.byte(), 0xAD);
        assert_eq!(Opcode::JmpAbsolute.byte(), 0x4C);
        assert_eq!(Opcode::JmpIndirect.byte(), 0x6C);
    }

    #[test]
    fn test_display() {
        assert_eq!(Opcode::LdaZeroPageX.to_string(), "LDA zp,X ($B5)");
        assert_eq!(Opcode::JmpIndirect.to_string(), "JMP (abs) ($6C)");
        assert_eq!(Opcode::Nop.to_string(), "NOP ($EA)");
    }

    #[test]
    fn test_try_from_rejects_undocumented() {
        assert_eq!(Opcode::try_from(0xFF), Err(0xFF));
        assert_eq!(Opcode::try_from(0x4C), Ok(Opcode::JmpAbsolute));
    }
}
