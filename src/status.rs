//! # Processor Status Flags
//!
//! The seven status flags are kept as independent `bool` fields. Packing into
//! the NV-BDIZC byte only happens when something asks for it.

/// The 6502 status flags.
///
/// Each flag is independently readable and writable. Flag-update helpers only
/// touch the flags they name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatusFlags {
    /// Carry (C)
    pub carry: bool,

    /// Zero (Z)
    pub zero: bool,

    /// Interrupt disable (I)
    pub interrupt_disable: bool,

    /// Decimal mode (D)
    pub decimal: bool,

    /// Break (B)
    pub break_command: bool,

    /// Overflow (V, sometimes written O)
    pub overflow: bool,

    /// Negative (N)
    pub negative: bool,
}

impl StatusFlags {
    pub const CARRY: u8 = 0b0000_0001;
    pub const ZERO: u8 = 0b0000_0010;
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    pub const DECIMAL: u8 = 0b0000_1000;
    pub const BREAK: u8 = 0b0001_0000;
    /// Bit 5 has no flag behind it and always reads as 1.
    pub const UNUSED: u8 = 0b0010_0000;
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const NEGATIVE: u8 = 0b1000_0000;

    /// All flags clear.
    pub const fn new() -> Self {
        Self {
            carry: false,
            zero: false,
            interrupt_disable: false,
            decimal: false,
            break_command: false,
            overflow: false,
            negative: false,
        }
    }

    /// Recomputes Z and N from a value just written to a register.
    ///
    /// - Zero: set iff `value == 0`
    /// - Negative: bit 7 of `value`
    ///
    /// Depends only on `value`; the previous Z and N are overwritten.
    pub fn set_zn(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & Self::NEGATIVE != 0;
    }

    /// Packs the flags into NV-BDIZC order with bit 5 set.
    ///
    /// ```
    /// use core6502::StatusFlags;
    ///
    /// let mut flags = StatusFlags::new();
    /// flags.negative = true;
    /// flags.carry = true;
    /// assert_eq!(flags.to_byte(), 0b1010_0001);
    /// ```
    pub const fn to_byte(self) -> u8 {
        let mut byte = Self::UNUSED;
        if self.negative {
            byte |= Self::NEGATIVE;
        }
        if self.overflow {
            byte |= Self::OVERFLOW;
        }
        if self.break_command {
            byte |= Self::BREAK;
        }
        if self.decimal {
            byte |= Self::DECIMAL;
        }
        if self.interrupt_disable {
            byte |= Self::INTERRUPT_DISABLE;
        }
        if self.zero {
            byte |= Self::ZERO;
        }
        if self.carry {
            byte |= Self::CARRY;
        }
        byte
    }

    /// Unpacks an NV-BDIZC byte. Bit 5 is ignored.
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            carry: byte & Self::CARRY != 0,
            zero: byte & Self::ZERO != 0,
            interrupt_disable: byte & Self::INTERRUPT_DISABLE != 0,
            decimal: byte & Self::DECIMAL != 0,
            break_command: byte & Self::BREAK != 0,
            overflow: byte & Self::OVERFLOW != 0,
            negative: byte & Self::NEGATIVE != 0,
        }
    }
}
