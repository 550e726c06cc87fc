//! Dispatch and execution semantics for every RV32I instruction, plus the
//! minimal Zicsr/system instructions (`ECALL`, `EBREAK`, `CSRRW`/`CSRRS`/`CSRRC`).

use super::Cpu;
use crate::common::Trap;
use crate::csr::Csrs;
use crate::isa::funct3::{alu, branch, load, store, system};
use crate::isa::funct7;
use crate::isa::opcodes::{
    OP_AUIPC, OP_BRANCH, OP_IMM, OP_JAL, OP_JALR, OP_LOAD, OP_LUI, OP_REG, OP_STORE, OP_SYSTEM,
};
use crate::isa::privileged;
use crate::isa::{decode, Decoded, InstructionBits};

/// Performs one fetch-decode-execute attempt.
///
/// Fetches the word at the current PC, advances PC by 4 (so decode sees PC
/// pointing at the *next* instruction), decodes, and dispatches. On success
/// the retired-instruction counter advances along with cycle/time; on a
/// trap, only cycle/time advance and PC is redirected to `mtvec`.
pub(super) fn step(cpu: &mut Cpu) {
    let faulting_pc = cpu.pc;
    let word = cpu.bus.load_word(faulting_pc);
    cpu.pc = faulting_pc.wrapping_add(4);

    let decoded = decode(word);

    match dispatch(cpu, &decoded, faulting_pc) {
        Ok(()) => cpu.csrs.retire(),
        Err(trap) => cpu.raise(trap, faulting_pc),
    }
}

fn dispatch(cpu: &mut Cpu, d: &Decoded, faulting_pc: u32) -> Result<(), Trap> {
    match d.opcode {
        OP_IMM => {
            let rs1v = cpu.regs.read(d.rs1);
            let imm_u = d.imm as u32;
            // There is no SUBI: bit 10 of the immediate only selects SRAI vs
            // SRLI when funct3 is the shift-right encoding. For every other
            // funct3 it's just an ordinary immediate bit, not an ALT selector.
            let is_alt = d.funct3 == alu::SRL_SRA && (imm_u >> 10) & 1 == 1;
            let result = alu_compute(d.funct3, is_alt, rs1v, imm_u);
            cpu.regs.write(d.rd, result);
        }
        OP_REG => {
            let result = alu_op_reg(cpu, d)?;
            cpu.regs.write(d.rd, result);
        }
        OP_LUI => cpu.regs.write(d.rd, (d.imm as u32) << 12),
        OP_AUIPC => cpu
            .regs
            .write(d.rd, faulting_pc.wrapping_add((d.imm as u32) << 12)),
        OP_JAL => {
            cpu.regs.write(d.rd, cpu.pc);
            cpu.pc = faulting_pc.wrapping_add(d.imm as u32);
        }
        OP_JALR => {
            let target = cpu.regs.read(d.rs1).wrapping_add(d.imm as u32) & !1u32;
            cpu.regs.write(d.rd, cpu.pc);
            cpu.pc = target;
        }
        OP_BRANCH => execute_branch(cpu, d, faulting_pc)?,
        OP_LOAD => execute_load(cpu, d)?,
        OP_STORE => execute_store(cpu, d)?,
        OP_SYSTEM => execute_system(cpu, d, faulting_pc)?,
        _ => return Err(Trap::IllegalInstruction(d.raw)),
    }
    Ok(())
}

/// Computes an ALU result shared by `OP-IMM` and `OP`. `rhs_for_shift_and_value`
/// is the immediate (register-immediate form) or `rs2` (register-register
/// form); shift amounts always come from its low 5 bits.
fn alu_compute(funct3: u32, is_alt: bool, lhs: u32, rhs_for_shift_and_value: u32) -> u32 {
    let shamt = rhs_for_shift_and_value & 0x1F;
    match funct3 {
        alu::ADD_SUB => {
            if is_alt {
                lhs.wrapping_sub(rhs_for_shift_and_value)
            } else {
                lhs.wrapping_add(rhs_for_shift_and_value)
            }
        }
        alu::SLT => u32::from((lhs as i32) < (rhs_for_shift_and_value as i32)),
        alu::SLTU => u32::from(lhs < rhs_for_shift_and_value),
        alu::XOR => lhs ^ rhs_for_shift_and_value,
        alu::OR => lhs | rhs_for_shift_and_value,
        alu::AND => lhs & rhs_for_shift_and_value,
        alu::SLL => lhs << shamt,
        alu::SRL_SRA => {
            if is_alt {
                ((lhs as i32) >> shamt) as u32
            } else {
                lhs >> shamt
            }
        }
        _ => unreachable!("funct3 is masked to 3 bits; all 8 values are handled above"),
    }
}

fn execute_system(cpu: &mut Cpu, d: &Decoded, faulting_pc: u32) -> Result<(), Trap> {
    match d.funct3 {
        system::PRIV => {
            let sub = d.raw.csr();
            match sub {
                privileged::ECALL => Err(Trap::EnvironmentCallFromMMode(faulting_pc)),
                privileged::EBREAK => Err(Trap::Breakpoint(faulting_pc)),
                _ => Err(Trap::IllegalInstruction(d.raw)),
            }
        }
        system::CSRRW | system::CSRRS | system::CSRRC => {
            let addr = d.raw.csr();
            if !Csrs::is_valid(addr) {
                return Err(Trap::IllegalInstruction(d.raw));
            }
            if Csrs::is_read_only(addr) && d.rs1 != 0 {
                return Err(Trap::IllegalInstruction(d.raw));
            }

            let old = cpu.csrs.read(addr);
            cpu.regs.write(d.rd, old);

            if d.rs1 != 0 {
                let rs1v = cpu.regs.read(d.rs1);
                let new_val = match d.funct3 {
                    system::CSRRW => rs1v,
                    system::CSRRS if cpu.csrrs_or_semantics => old | rs1v,
                    system::CSRRS => old & rs1v,
                    system::CSRRC => old & !rs1v,
                    _ => unreachable!(),
                };
                cpu.csrs.write(addr, new_val);
            }
            Ok(())
        }
        _ => Err(Trap::IllegalInstruction(d.raw)),
    }
}

fn execute_branch(cpu: &mut Cpu, d: &Decoded, faulting_pc: u32) -> Result<(), Trap> {
    let lhs = cpu.regs.read(d.rs1);
    let rhs = cpu.regs.read(d.rs2);
    let taken = match d.funct3 {
        branch::BEQ => lhs == rhs,
        branch::BNE => lhs != rhs,
        branch::BLT => (lhs as i32) < (rhs as i32),
        branch::BGE => (lhs as i32) >= (rhs as i32),
        branch::BLTU => lhs < rhs,
        branch::BGEU => lhs >= rhs,
        _ => return Err(Trap::IllegalInstruction(d.raw)),
    };
    if taken {
        cpu.pc = faulting_pc.wrapping_add(d.imm as u32);
    }
    Ok(())
}

fn execute_load(cpu: &mut Cpu, d: &Decoded) -> Result<(), Trap> {
    let addr = cpu.regs.read(d.rs1).wrapping_add(d.imm as u32);
    let value = match d.funct3 {
        load::LB => (i32::from(cpu.bus.load_byte(addr) as i8)) as u32,
        load::LH => (i32::from(cpu.bus.load_half(addr) as i16)) as u32,
        load::LW => cpu.bus.load_word(addr),
        load::LBU => u32::from(cpu.bus.load_byte(addr)),
        load::LHU => u32::from(cpu.bus.load_half(addr)),
        _ => return Err(Trap::IllegalInstruction(d.raw)),
    };
    cpu.regs.write(d.rd, value);
    Ok(())
}

fn execute_store(cpu: &mut Cpu, d: &Decoded) -> Result<(), Trap> {
    let addr = cpu.regs.read(d.rs1).wrapping_add(d.imm as u32);
    let rs2v = cpu.regs.read(d.rs2);
    match d.funct3 {
        store::SB => cpu.bus.store_byte(addr, rs2v as u8),
        store::SH => cpu.bus.store_half(addr, rs2v as u16),
        store::SW => cpu.bus.store_word(addr, rs2v),
        _ => return Err(Trap::IllegalInstruction(d.raw)),
    }
    Ok(())
}

fn alu_op_reg(cpu: &mut Cpu, d: &Decoded) -> Result<u32, Trap> {
    let is_alt = d.funct7 == funct7::ALT;
    if d.funct7 != funct7::DEFAULT && d.funct7 != funct7::ALT {
        return Err(Trap::IllegalInstruction(d.raw));
    }
    let lhs = cpu.regs.read(d.rs1);
    let rhs = cpu.regs.read(d.rs2);
    // SUB/SRA are only legal in combination with ADD_SUB/SRL_SRA; any other
    // funct3 paired with the alternate funct7 is not a real instruction.
    if is_alt && d.funct3 != alu::ADD_SUB && d.funct3 != alu::SRL_SRA {
        return Err(Trap::IllegalInstruction(d.raw));
    }
    Ok(alu_compute(d.funct3, is_alt, lhs, rhs))
}
