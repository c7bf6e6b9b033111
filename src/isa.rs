use serde::{Deserialize, Serialize};

/// MIPS32 instruction encoding shape. The shape fixes the field widths and
/// how the operand text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstrKind {
    R,
    I,
    J,
}

/// Classification result: the encoding shape plus the opcode (I/J) or funct
/// number (R) used as the numeric code in the instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    pub kind: InstrKind,
    pub code: u8,
}

// R-format codes are funct numbers; I/J codes are opcodes.
pub const FUNCT_SLL: u8 = 0;
pub const FUNCT_SRL: u8 = 2;
pub const FUNCT_JR: u8 = 8;
pub const OP_BEQ: u8 = 4;
pub const OP_BNE: u8 = 5;
pub const OP_LUI: u8 = 15;
pub const OP_LW: u8 = 35;
pub const OP_SW: u8 = 43;

/// Register number of `$ra`, the only register `jr` encodes.
pub const REG_RA: u8 = 31;

// R-format mnemonics indexed by funct number; empty slots are funct values
// outside the supported subset and never match.
const R_FUNCTS: [&str; 44] = [
    "sll", "", "srl", "", "", "", "", "", "jr", "", "", //
    "", "", "", "", "", "", "", "", "", "", "", //
    "", "", "", "", "", "", "", "", "", "", //
    "add", "addu", "sub", "subu", "and", "or", "", "nor", "", "", "slt", "sltu",
];

// I-format mnemonics indexed by opcode.
const I_OPCODES: [&str; 44] = [
    "", "", "", "", "beq", "bne", "", "", "addi", "addiu", "slti", //
    "sltiu", "andi", "ori", "", "lui", "", "", "", "", "", "", //
    "", "", "", "", "", "", "", "", "", "", "", "", "", //
    "lw", "", "", "", "", "", "", "", "sw",
];

// J-format mnemonics indexed by opcode.
const J_OPCODES: [&str; 4] = ["", "", "j", "jal"];

// Register names indexed by register number 0..=31.
pub const REGISTERS: [&str; 32] = [
    "$zero", "$at", //
    "$v0", "$v1", //
    "$a0", "$a1", "$a2", "$a3", //
    "$t0", "$t1", "$t2", "$t3", "$t4", "$t5", "$t6", "$t7", //
    "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", //
    "$t8", "$t9", //
    "$k0", "$k1", //
    "$gp", "$sp", "$fp", "$ra",
];

/// Maps a mnemonic to its format and numeric code. The J table is scanned
/// first, then the R and I tables in a single indexed pass with R taking
/// priority at equal index; first match wins. Returns `None` for anything
/// outside the supported subset.
pub fn classify(mnemonic: &str) -> Option<Format> {
    if mnemonic.is_empty() {
        return None;
    }

    for (code, name) in J_OPCODES.iter().enumerate() {
        if *name == mnemonic {
            return Some(Format {
                kind: InstrKind::J,
                code: code as u8,
            });
        }
    }

    for (code, (r_name, i_name)) in R_FUNCTS.iter().zip(I_OPCODES.iter()).enumerate() {
        if *r_name == mnemonic {
            return Some(Format {
                kind: InstrKind::R,
                code: code as u8,
            });
        }
        if *i_name == mnemonic {
            return Some(Format {
                kind: InstrKind::I,
                code: code as u8,
            });
        }
    }

    None
}

/// Maps a register name (e.g. `$t0`) to its number. Comparison is exact and
/// case-sensitive; unknown names return `None`.
pub fn register_number(name: &str) -> Option<u8> {
    REGISTERS
        .iter()
        .position(|&reg| reg == name)
        .map(|number| number as u8)
}
