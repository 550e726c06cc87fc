//! Binary image loading from disk.

use std::io::Write as _;

use tempfile::NamedTempFile;

use rv32i_core::loader;

fn temp_binary(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(data).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[test]
fn loads_the_exact_bytes_on_disk() {
    let data = vec![0x13, 0x00, 0x00, 0x00];
    let file = temp_binary(&data);
    let loaded = loader::load_binary(file.path().to_str().expect("utf-8 path"));
    assert_eq!(loaded, data);
}

#[test]
fn loads_an_empty_file_as_an_empty_buffer() {
    let file = temp_binary(&[]);
    let loaded = loader::load_binary(file.path().to_str().expect("utf-8 path"));
    assert!(loaded.is_empty());
}

#[test]
fn preserves_byte_order_and_length_for_larger_images() {
    let data: Vec<u8> = (0..1024).map(|i| (i % 256) as u8).collect();
    let file = temp_binary(&data);
    let loaded = loader::load_binary(file.path().to_str().expect("utf-8 path"));
    assert_eq!(loaded, data);
}

// A nonexistent path cannot be tested here: load_binary calls process::exit(1)
// on failure, which would terminate the test process itself.
