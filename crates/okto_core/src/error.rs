use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the emulation engine.
///
/// Unrecognized opcode patterns are deliberately not listed here: the
/// reference machine ignores them, and some ROMs probe for extensions by
/// executing words they expect to be no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// ROM larger than the program memory past the load address.
    #[error("ROM of {size} bytes exceeds the {capacity} bytes of program memory")]
    RomTooLarge { size: usize, capacity: usize },
    /// CALL with all 16 stack slots already in use.
    #[error("call stack overflow at {pc:#06X}")]
    StackOverflow { pc: u16 },
    /// RET with an empty call stack.
    #[error("call stack underflow at {pc:#06X}")]
    StackUnderflow { pc: u16 },
}
