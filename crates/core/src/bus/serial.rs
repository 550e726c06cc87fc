//! Single-byte MMIO serial port.

use std::io::{Read, Write};

use super::Region;

/// A one-byte-wide serial MMIO endpoint.
///
/// The address within its (size-1) window is irrelevant: any load reads the
/// next byte from the reader, any store writes the low 8 bits of the value to
/// the writer. Wider accesses are truncated (stores) or zero-extended
/// (loads) to that single byte. A missing stream makes loads read 0 and
/// stores no-op; I/O errors are swallowed rather than propagated, matching a
/// simulator that has no bus-error concept for devices.
pub struct Serial {
    reader: Option<Box<dyn Read + Send>>,
    writer: Option<Box<dyn Write + Send>>,
}

impl Serial {
    /// Creates a serial endpoint with no reader or writer attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reader: None,
            writer: None,
        }
    }

    /// Attaches an input stream; loads will read from it thereafter.
    #[must_use]
    pub fn with_reader(mut self, reader: Box<dyn Read + Send>) -> Self {
        self.reader = Some(reader);
        self
    }

    /// Attaches an output stream; stores will write to it thereafter.
    #[must_use]
    pub fn with_writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.writer = Some(writer);
        self
    }

    fn read_byte(&mut self) -> u8 {
        let Some(reader) = self.reader.as_mut() else {
            return 0;
        };
        let mut buf = [0u8; 1];
        match reader.read(&mut buf) {
            Ok(1) => buf[0],
            _ => 0,
        }
    }

    fn write_byte(&mut self, val: u8) {
        if let Some(writer) = self.writer.as_mut() {
            let _ = writer.write_all(&[val]);
            let _ = writer.flush();
        }
    }
}

impl Default for Serial {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Serial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serial")
            .field("reader", &self.reader.is_some())
            .field("writer", &self.writer.is_some())
            .finish()
    }
}

impl Region for Serial {
    fn read_u8(&mut self, _offset: u32) -> u8 {
        self.read_byte()
    }

    fn read_u16(&mut self, _offset: u32) -> u16 {
        u16::from(self.read_byte())
    }

    fn read_u32(&mut self, _offset: u32) -> u32 {
        u32::from(self.read_byte())
    }

    fn write_u8(&mut self, _offset: u32, val: u8) {
        self.write_byte(val);
    }

    fn write_u16(&mut self, _offset: u32, val: u16) {
        #[allow(clippy::cast_possible_truncation)]
        self.write_byte(val as u8);
    }

    fn write_u32(&mut self, _offset: u32, val: u32) {
        #[allow(clippy::cast_possible_truncation)]
        self.write_byte(val as u8);
    }
}
