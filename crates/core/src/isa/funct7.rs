//! `funct7` constants (instruction bits `[31:25]`).

/// Default `funct7`: selects `ADD`, `SRL`, and all other non-alternate operations.
pub const DEFAULT: u32 = 0b0000000;
/// Alternate `funct7`: selects `SUB` (with `ADD_SUB`) or `SRA` (with `SRL_SRA`).
pub const ALT: u32 = 0b0100000;
