// src/error.rs
#![forbid(unsafe_code)]

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Decode/encode failures for the DAT, C2M-map and TWS codecs.
///
/// Mutating operations on cells and levels never produce these; illegal
/// edits are reconciled in place. Errors surface only at the byte
/// boundary, plus `InvariantViolated` when the DAT writer is handed a
/// level that fails `Level::is_valid`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bad magic number {0:#010x}")]
    BadMagic(u32),

    #[error("unexpected end of data while reading {0}")]
    Truncated(&'static str),

    #[error("optional field {id} has malformed length {len}")]
    BadFieldLength { id: u8, len: usize },

    #[error("corrupt run-length data: {0}")]
    BadRle(&'static str),

    #[error("invalid tile code {0:#04x}")]
    InvalidTileCode(u8),

    #[error("declared section size {len} exceeds the {max}-byte ceiling")]
    LayerTooLarge { len: usize, max: usize },

    #[error("level failed validity check: {0}")]
    InvariantViolated(&'static str),

    #[error("unknown tile opcode {0:#04x}")]
    UnknownOpcode(u8),

    #[error("unsupported modifier for opcode {opcode:#04x}: {reason}")]
    UnsupportedModifier { opcode: u8, reason: &'static str },
}
