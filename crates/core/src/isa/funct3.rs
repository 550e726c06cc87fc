//! `funct3` constants (instruction bits `[14:12]`), grouped by opcode family.

/// `LOAD` widths.
pub mod load {
    /// Load byte, sign-extended.
    pub const LB: u32 = 0b000;
    /// Load halfword, sign-extended.
    pub const LH: u32 = 0b001;
    /// Load word.
    pub const LW: u32 = 0b010;
    /// Load byte, zero-extended.
    pub const LBU: u32 = 0b100;
    /// Load halfword, zero-extended.
    pub const LHU: u32 = 0b101;
}

/// `STORE` widths.
pub mod store {
    /// Store byte.
    pub const SB: u32 = 0b000;
    /// Store halfword.
    pub const SH: u32 = 0b001;
    /// Store word.
    pub const SW: u32 = 0b010;
}

/// `BRANCH` conditions.
pub mod branch {
    /// Branch if equal.
    pub const BEQ: u32 = 0b000;
    /// Branch if not equal.
    pub const BNE: u32 = 0b001;
    /// Branch if less than (signed).
    pub const BLT: u32 = 0b100;
    /// Branch if greater-or-equal (signed).
    pub const BGE: u32 = 0b101;
    /// Branch if less than (unsigned).
    pub const BLTU: u32 = 0b110;
    /// Branch if greater-or-equal (unsigned).
    pub const BGEU: u32 = 0b111;
}

/// `OP-IMM` / `OP` ALU operations. `ADD`/`SUB` and `SRL`/`SRA` share an encoding,
/// disambiguated by [`crate::isa::funct7`].
pub mod alu {
    /// `ADD` (register-register) / `ADDI` (register-immediate).
    pub const ADD_SUB: u32 = 0b000;
    /// `SLL`/`SLLI`: logical left shift.
    pub const SLL: u32 = 0b001;
    /// `SLT`/`SLTI`: set-less-than, signed.
    pub const SLT: u32 = 0b010;
    /// `SLTU`/`SLTIU`: set-less-than, unsigned.
    pub const SLTU: u32 = 0b011;
    /// `XOR`/`XORI`.
    pub const XOR: u32 = 0b100;
    /// `SRL`/`SRLI` (logical) or `SRA`/`SRAI` (arithmetic); see [`crate::isa::funct7`].
    pub const SRL_SRA: u32 = 0b101;
    /// `OR`/`ORI`.
    pub const OR: u32 = 0b110;
    /// `AND`/`ANDI`.
    pub const AND: u32 = 0b111;
}

/// `SYSTEM` sub-selectors.
pub mod system {
    /// `ECALL`/`EBREAK`, disambiguated by the immediate field.
    pub const PRIV: u32 = 0b000;
    /// `CSRRW`: atomic read/write CSR.
    pub const CSRRW: u32 = 0b001;
    /// `CSRRS`: atomic read and set bits in CSR.
    pub const CSRRS: u32 = 0b010;
    /// `CSRRC`: atomic read and clear bits in CSR.
    pub const CSRRC: u32 = 0b011;
}
