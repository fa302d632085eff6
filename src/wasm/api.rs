//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for reset, stepping and state
//! inspection.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::{CpuConfig, FlatMemory, MemoryBus, CPU};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// A single emulated machine: one CPU and the memory it runs against.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU,
    memory: FlatMemory,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator in the reset state.
    ///
    /// `nmos` selects NMOS-accurate addressing quirks instead of the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(nmos: bool) -> Self {
        let config = if nmos {
            CpuConfig::nmos()
        } else {
            CpuConfig::default()
        };
        let mut emulator = Emulator6502 {
            cpu: CPU::with_config(config),
            memory: FlatMemory::new(),
        };
        emulator.reset();
        emulator
    }

    /// Zero memory and registers; PC = $FFFC.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.memory);
    }

    /// Execute one instruction. Skipped opcodes come back as an error whose
    /// message names the byte and address; the emulator can keep stepping.
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu
            .execute(&mut self.memory)
            .map(|_| ())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute until at least `cycles` cycles have been consumed.
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        let consumed = self.cpu.run_for_cycles(&mut self.memory, u64::from(cycles));
        u32::try_from(consumed).unwrap_or(u32::MAX)
    }

    // ========== State Inspection ==========

    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Packed NV-BDIZC status byte.
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Cycle count as f64 (JavaScript numbers are doubles).
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64
    }

    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    // ========== Memory Access ==========

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Copy a program image into memory at `start_addr`.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.memory.load(start_addr, program);
    }

    /// One 256-byte page of memory as a `Uint8Array`.
    pub fn memory_page(&self, page: u8) -> Uint8Array {
        let start = usize::from(page) << 8;
        Uint8Array::from(&self.memory.as_slice()[start..start + 0x100])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_flag_is_visible() {
        let mut emulator = Emulator6502::new(false);
        emulator.cpu.set_status(0b0001_1100);

        assert!(emulator.flag_b());
        assert!(emulator.flag_d());
        assert!(emulator.flag_i());
        assert!(!emulator.flag_n());
        assert!(!emulator.flag_v());
        assert!(!emulator.flag_z());
        assert!(!emulator.flag_c());
    }
}
