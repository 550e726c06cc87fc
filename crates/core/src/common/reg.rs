//! General-purpose register file.
//!
//! Maintains the 32 integer registers `x0`-`x31`. `x0` is hardwired to zero:
//! reads always yield 0 and writes are discarded.

/// The 32 general-purpose integer registers.
#[derive(Debug, Clone)]
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a register file with all registers, including `x0`, set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a register. `x0` always reads as 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..32`; this indicates a decoder bug, since
    /// register fields are always 5 bits wide.
    #[must_use]
    pub fn read(&self, idx: u32) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx as usize]
        }
    }

    /// Writes a register. Writes to `x0` are silently discarded.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..32`; this indicates a decoder bug, since
    /// register fields are always 5 bits wide.
    pub fn write(&mut self, idx: u32, val: u32) {
        if idx != 0 {
            self.regs[idx as usize] = val;
        }
    }

    /// Dumps all registers to stdout for debugging.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
