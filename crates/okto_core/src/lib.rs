pub mod app;
pub mod emulator;
mod error;
pub mod instruction;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use app::EmulatorApp;
pub use emulator::Emulator;
pub use error::{Error, Result};
pub use instruction::Instruction;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 64;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 32;
/// Default integer scaling factor for the SDL frontend.
pub const SCREEN_SCALE: u32 = 10;

pub const RAM_SIZE: usize = 4096;
pub const NUM_REGS: usize = 16;
pub const STACK_SIZE: usize = 16;
pub const NUM_KEYS: usize = 16;

/// Programs load here; everything below belongs to the interpreter.
pub const START_ADDRESS: u16 = 0x200;
/// Addresses are 12 bits wide; memory accesses wrap through this mask.
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Where the hex-digit glyphs live in memory.
pub const FONTSET_START: usize = 0x50;
/// Each glyph is 5 bytes tall.
pub const BYTES_PER_CHAR: usize = 5;
pub const FONTSET_SIZE: usize = 80;

/// Sprite data for the hex digits 0-F, one row per byte, bit 7 leftmost.
pub const FONTSET: [u8; FONTSET_SIZE] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
