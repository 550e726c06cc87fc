//! Board: wires a program image and serial MMIO into a CPU at the reset address.

use std::io::{Read, Write};

use crate::bus::{Bus, Ram, Serial};
use crate::config::Config;
use crate::cpu::Cpu;

/// A fully wired machine: RAM loaded with a program image, a serial MMIO
/// endpoint, and a CPU reset to run from the image's load address.
///
/// This is the thing a CLI or test harness constructs and then drives with
/// [`Cpu::execute`] or [`Cpu::step`].
#[derive(Debug)]
pub struct Board {
    cpu: Cpu,
}

impl Board {
    /// Builds a board from `config`, loading `image` into a RAM region at
    /// `config.reset_pc` sized to exactly `image.len()` bytes (no separate
    /// BSS), and registering the serial MMIO region at `config.serial_base`.
    /// The CPU's PC starts at `config.reset_pc`.
    ///
    /// The serial endpoint has no reader or writer attached; use
    /// [`Board::with_serial`] instead to wire one up before any instruction
    /// runs.
    #[must_use]
    pub fn new(config: &Config, image: &[u8]) -> Self {
        Self::build(config, image, Serial::new())
    }

    /// Builds a board exactly like [`Board::new`], but with `reader` and/or
    /// `writer` attached to the serial endpoint from the start.
    #[must_use]
    pub fn with_serial(
        config: &Config,
        image: &[u8],
        reader: Option<Box<dyn Read + Send>>,
        writer: Option<Box<dyn Write + Send>>,
    ) -> Self {
        let mut serial = Serial::new();
        if let Some(reader) = reader {
            serial = serial.with_reader(reader);
        }
        if let Some(writer) = writer {
            serial = serial.with_writer(writer);
        }
        Self::build(config, image, serial)
    }

    fn build(config: &Config, image: &[u8], serial: Serial) -> Self {
        let mut bus = Bus::new();
        bus.add_region(
            config.reset_pc,
            image.len() as u32,
            Box::new(Ram::new(image.len())),
        );
        bus.add_region(config.serial_base, 1, Box::new(serial));
        bus.load_image_at(image, config.reset_pc);

        let cpu = Cpu::new(bus, config.reset_pc, config.csrrs_or_semantics);
        Self { cpu }
    }

    /// Runs the CPU until it halts, returning the value written to the halt
    /// pseudo-CSR.
    pub fn run(&mut self) -> u32 {
        self.cpu.execute()
    }

    /// The underlying CPU, for test harnesses that want to single-step or
    /// inspect architectural state directly.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// The underlying CPU, read-only.
    #[must_use]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }
}
