//! WebAssembly bindings for the core6502 emulator.
//!
//! JavaScript-callable wrapper that owns one CPU and one 64KB memory image.

pub mod api;

pub use api::Emulator6502;
