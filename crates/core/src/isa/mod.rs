//! RV32I instruction-set definitions.
//!
//! This module holds the pure, side-effect-free parts of instruction handling:
//! bit-field extraction, immediate reconstruction, and the opcode/funct3/funct7
//! constants for the base integer ISA plus the minimal Zicsr/system encodings
//! needed for CSR access, `ECALL`, and `EBREAK`.

/// Bit-field extraction trait and the decoded-instruction result type.
pub mod instruction;

/// Top-level `decode` entry point: raw instruction word to [`instruction::Decoded`].
pub mod decode;

/// Opcode constants for the RV32I base instruction formats.
pub mod opcodes;

/// `funct3` constants, grouped by opcode family.
pub mod funct3;

/// `funct7` constants.
pub mod funct7;

/// `SYSTEM` opcode sub-encodings: `ECALL`/`EBREAK`/CSR instructions.
pub mod privileged;

pub use decode::decode;
pub use instruction::{Decoded, InstructionBits};
