//! CPU construction-time options.
//!
//! Two addressing behaviours differ between the reference core and real NMOS
//! silicon. Both are selectable here so each interpretation can be run and
//! tested side by side.

/// How Zero Page,X and Zero Page,Y fold the indexed sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroPageIndexing {
    /// `(operand & 0xFF) + index` is used as-is, so `$F0,X` with X = 0x20
    /// reads 0x0110.
    #[default]
    Unmasked,

    /// The sum is masked to 8 bits and stays inside the zero page, so the
    /// same example reads 0x0010. This is what NMOS hardware does.
    Wrapped,
}

/// How JMP (Indirect) reads the second pointer byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndirectJump {
    /// High byte comes from `pointer + 1`, crossing into the next page
    /// when needed.
    #[default]
    Linear,

    /// NMOS page-wrap bug: with a pointer of `$xxFF` the high byte comes from
    /// `$xx00` instead of the next page.
    PageWrap,
}

/// Options fixed when a [`CPU`](crate::CPU) is built.
///
/// # Examples
///
/// ```
/// use core6502::{CpuConfig, IndirectJump, ZeroPageIndexing, CPU};
///
/// let config = CpuConfig {
///     zero_page_indexing: ZeroPageIndexing::Wrapped,
///     indirect_jump: IndirectJump::PageWrap,
///     page_cross_penalty: true,
/// };
/// let cpu = CPU::with_config(config);
/// assert_eq!(cpu.config(), config);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuConfig {
    pub zero_page_indexing: ZeroPageIndexing,
    pub indirect_jump: IndirectJump,

    /// Charge one extra cycle when an indexed read lands on a different page
    /// than its base address. Off by default; the crossing is recorded either
    /// way and is visible through [`CPU::page_crossed`](crate::CPU::page_crossed).
    pub page_cross_penalty: bool,
}

impl CpuConfig {
    /// NMOS-accurate addressing: wrapped zero page indexing, the indirect JMP
    /// page bug and page-crossing penalties.
    pub const fn nmos() -> Self {
        Self {
            zero_page_indexing: ZeroPageIndexing::Wrapped,
            indirect_jump: IndirectJump::PageWrap,
            page_cross_penalty: true,
        }
    }
}
