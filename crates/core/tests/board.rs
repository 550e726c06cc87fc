//! Board wiring: RAM is sized to the image, not to an independent default.

use rv32i_core::{Board, Config};

fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

fn s_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    hi << 25 | (rs2 & 0x1F) << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | lo << 7 | (opcode & 0x7F)
}

fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xFFFFF) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

const OP_IMM: u32 = 0b0010011;
const OP_LUI: u32 = 0b0110111;
const OP_STORE: u32 = 0b0100011;
const OP_LOAD: u32 = 0b0000011;

#[test]
fn a_store_past_the_end_of_the_image_misses_the_bus_instead_of_landing_in_ram() {
    // addi x1, x0, -1 ; lui x2, 0x100 (x2 = 0x0010_0000, 1 MiB past the
    // reset address, still well within the old fixed 16 MiB RAM default) ;
    // sw x1, 0(x2) ; lw x3, 0(x2)
    let words = [
        i_type(OP_IMM, 1, 0b000, 0, -1),
        u_type(OP_LUI, 2, 0x100),
        s_type(OP_STORE, 0b010, 2, 1, 0),
        i_type(OP_LOAD, 3, 0b010, 2, 0),
    ];
    let mut image = Vec::new();
    for w in words {
        image.extend_from_slice(&w.to_le_bytes());
    }

    let config = Config::default();
    let mut board = Board::new(&config, &image);
    for _ in 0..words.len() {
        board.cpu_mut().step();
    }

    // The store at 0x0010_0000 missed every region (RAM only spans the
    // 16-byte image itself), so the load reads back 0, not the stored -1.
    assert_eq!(board.cpu().reg(3), 0);
}

#[test]
fn ram_region_exactly_spans_the_loaded_image() {
    let image = vec![0x13, 0x00, 0x00, 0x00]; // addi x0, x0, 0 (nop)
    let config = Config::default();
    let mut board = Board::new(&config, &image);

    board.cpu_mut().step();
    assert_eq!(board.cpu().pc(), config.reset_pc + 4);

    // One word past the image is out of RAM: fetching there reads the bus
    // miss value of 0, an all-zero word with no valid opcode, so it traps
    // as illegal rather than executing whatever RAM padding would hold if
    // the region had been oversized.
    board.cpu_mut().step();
    assert_eq!(board.cpu().csr(rv32i_core::csr::MCAUSE), 2);
}
