//! Binary image loading.
//!
//! Reads a bare-metal program image from disk into a byte buffer. There is
//! no kernel/firmware staging here: a single flat image is loaded at the
//! board's reset address by the caller.

use std::fs;
use std::process;

/// Reads a binary image file from disk.
///
/// Exits the process with status 1 and a diagnostic on stderr if the file
/// cannot be read, rather than returning a `Result`: this is the host-level
/// entry point's own fallibility, not a simulator error.
pub fn load_binary(path: &str) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(1);
    })
}
