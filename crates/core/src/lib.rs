//! RV32I functional simulator library.
//!
//! This crate implements a sequential, single-hart simulator of the RV32I base
//! integer instruction set with:
//! 1. **CPU:** 32 general-purpose registers, a 32-bit PC, and a machine-mode
//!    CSR file, driving a fetch/decode/execute loop.
//! 2. **ISA:** pure bit-field decoding for the five RV32I instruction formats.
//! 3. **Bus:** an address-range router dispatching loads/stores to registered
//!    memory regions (RAM, serial MMIO).
//! 4. **Traps:** synchronous exceptions only (illegal instruction, breakpoint,
//!    environment call), delivered through the standard `mepc`/`mcause`/`mtval`/`mtvec`
//!    protocol.
//!
//! There is no supervisor/user mode, no interrupts, no virtual memory, and no
//! extensions beyond the base integer ISA and the minimal Zicsr subset needed
//! to support traps and the halt convention.

/// Shared fundamentals: trap representation and the CPU register file.
pub mod common;

/// Control and status register file.
pub mod csr;

/// Instruction decoding: bit-field extraction for all five RV32I formats.
pub mod isa;

/// Address-mapped bus and memory region implementations.
pub mod bus;

/// CPU core: fetch, decode, execute, and trap dispatch.
pub mod cpu;

/// Board: wires a program image and serial MMIO into a CPU at the reset address.
pub mod board;

/// Simulator configuration.
pub mod config;

/// Binary image loading.
pub mod loader;

pub use crate::{board::Board, config::Config, cpu::Cpu};
