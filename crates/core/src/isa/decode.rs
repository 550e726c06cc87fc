//! Instruction decoding: reconstructs fields and the format-specific immediate
//! for a raw 32-bit instruction word.

use super::instruction::{Decoded, InstructionBits};
use super::opcodes::{
    OP_AUIPC, OP_BRANCH, OP_IMM, OP_JAL, OP_JALR, OP_LOAD, OP_LUI, OP_MISC_MEM, OP_REG, OP_STORE,
    OP_SYSTEM,
};

/// Bit position of the S-immediate low field within the instruction word.
const S_IMM_LOW_SHIFT: u32 = 7;
/// Bit position of the S-immediate high field within the instruction word.
const S_IMM_HIGH_SHIFT: u32 = 25;
/// Width, in bits, of the S-immediate low field.
const S_IMM_LOW_BITS: u32 = 5;
/// Total width, in bits, of the S-immediate (sign bit included).
const S_IMM_BITS: u32 = 12;

/// Total width, in bits, of the B-immediate (sign bit included).
const B_IMM_BITS: u32 = 13;
/// Total width, in bits, of the J-immediate (sign bit included).
const J_IMM_BITS: u32 = 21;
/// Total width, in bits, of the I-immediate (sign bit included).
const I_IMM_BITS: u32 = 12;

/// Sign-extends the low `bits` bits of `val`, treating bit `bits - 1` as the sign.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((val << shift) as i32) >> shift
}

fn decode_i_type_imm(inst: u32) -> i32 {
    sign_extend(inst >> 20, I_IMM_BITS)
}

fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & 0x1F;
    let high = (inst >> S_IMM_HIGH_SHIFT) & 0x7F;
    let combined = (high << S_IMM_LOW_BITS) | low;
    sign_extend(combined, S_IMM_BITS)
}

fn decode_b_type_imm(inst: u32) -> i32 {
    let bit12 = (inst >> 31) & 0x1;
    let bit11 = (inst >> 7) & 0x1;
    let bits10_5 = (inst >> 25) & 0x3F;
    let bits4_1 = (inst >> 8) & 0xF;
    let combined = (bit12 << 12) | (bit11 << 11) | (bits10_5 << 5) | (bits4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// Returns the U-immediate as the raw, unshifted 20-bit value in bits `[31:12]`.
///
/// Per the instruction format this is *not* left-shifted by 12 here; `LUI`
/// and `AUIPC` perform that shift themselves during execution.
fn decode_u_type_imm(inst: u32) -> i32 {
    (inst >> 12) as i32
}

fn decode_j_type_imm(inst: u32) -> i32 {
    let bit20 = (inst >> 31) & 0x1;
    let bits19_12 = (inst >> 12) & 0xFF;
    let bit11 = (inst >> 20) & 0x1;
    let bits10_1 = (inst >> 21) & 0x3FF;
    let combined = (bit20 << 20) | (bits19_12 << 12) | (bit11 << 11) | (bits10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Decodes a raw instruction word into opcode, register, funct, and immediate
/// fields, per the format the opcode selects.
///
/// Any opcode this function doesn't recognize still has its bare fields
/// extracted (opcode/rd/rs1/rs2/funct3/funct7); the CPU's dispatch is what
/// actually raises `IllegalInstruction` for unsupported opcodes.
#[must_use]
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    let rd = inst.rd();
    let rs1 = inst.rs1();
    let rs2 = inst.rs2();
    let funct3 = inst.funct3();
    let funct7 = inst.funct7();

    let imm = match opcode {
        OP_LOAD | OP_IMM | OP_JALR | OP_SYSTEM | OP_MISC_MEM => decode_i_type_imm(inst),
        OP_STORE => decode_s_type_imm(inst),
        OP_BRANCH => decode_b_type_imm(inst),
        OP_LUI | OP_AUIPC => decode_u_type_imm(inst),
        OP_JAL => decode_j_type_imm(inst),
        OP_REG | _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd,
        rs1,
        rs2,
        funct3,
        funct7,
        imm,
    }
}
