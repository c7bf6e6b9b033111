use thiserror::Error;

use crate::isa::{self, Format, InstrKind};
use crate::labels::LabelTable;
use crate::tokens::{self, OperandError};

/// Everything that can go wrong while encoding one instruction line. All of
/// these are per-line conditions: the line emits nothing and assembly moves
/// on to the next line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{0} is an invalid instruction name")]
    UnknownMnemonic(String),
    #[error("{0} is an invalid register name")]
    UnknownRegister(String),
    #[error("label {0} not found in the label table")]
    LabelNotFound(String),
    #[error(transparent)]
    Operands(#[from] OperandError),
    #[error("invalid token {token} for {context} instruction")]
    RegisterWhereLiteral { token: String, context: &'static str },
    #[error("{0} is not a valid decimal literal")]
    BadLiteral(String),
}

/// Accumulates (value, width) fields most-significant first into a 32-bit
/// instruction word. Each value is truncated to its field width, so negative
/// displacements wrap to two's complement and oversized values lose their
/// high bits.
#[derive(Debug, Default)]
struct FieldPacker {
    bits: u32,
    width: u32,
}

impl FieldPacker {
    fn push(&mut self, value: u32, width: u32) -> &mut Self {
        debug_assert!(self.width + width <= 32);
        let mask = if width == 32 {
            u32::MAX
        } else {
            (1u32 << width) - 1
        };
        self.bits = (self.bits << width) | (value & mask);
        self.width += width;
        self
    }

    fn finish(&self) -> u32 {
        debug_assert_eq!(self.width, 32, "instruction fields must total 32 bits");
        self.bits
    }
}

/// Renders an instruction word as its 32-character binary-digit string,
/// most significant bit first.
pub fn render_word(word: u32) -> String {
    format!("{word:032b}")
}

/// Encodes one classified instruction. `Ok(None)` means the line is valid
/// but produces no output (`jr` through a register other than `$ra`).
pub fn encode(
    format: Format,
    operand_text: &str,
    pc: u32,
    table: &LabelTable,
) -> Result<Option<u32>, EncodeError> {
    match format.kind {
        InstrKind::R => encode_r(format.code, operand_text),
        InstrKind::I => encode_i(format.code, operand_text, pc, table).map(Some),
        InstrKind::J => encode_j(format.code, operand_text, table).map(Some),
    }
}

fn register(name: &str) -> Result<u32, EncodeError> {
    isa::register_number(name)
        .map(u32::from)
        .ok_or_else(|| EncodeError::UnknownRegister(name.to_owned()))
}

/// Parses a decimal literal operand. A register sigil here means the wrong
/// operand kind was written, which is reported distinctly from a literal
/// that simply does not parse.
fn literal(token: &str, context: &'static str) -> Result<i32, EncodeError> {
    if token.starts_with('$') {
        return Err(EncodeError::RegisterWhereLiteral {
            token: token.to_owned(),
            context,
        });
    }
    token
        .parse::<i32>()
        .map_err(|_| EncodeError::BadLiteral(token.to_owned()))
}

fn encode_r(code: u8, operand_text: &str) -> Result<Option<u32>, EncodeError> {
    match code {
        isa::FUNCT_JR => {
            let ops = tokens::operands(operand_text, 1)?;
            let reg = register(ops[0])?;
            // jr is only encodable through $ra; any other register is
            // accepted and dropped without a diagnostic.
            if reg != u32::from(isa::REG_RA) {
                return Ok(None);
            }
            let mut word = FieldPacker::default();
            word.push(0, 6)
                .push(reg, 5)
                .push(0, 15)
                .push(code.into(), 6);
            Ok(Some(word.finish()))
        }
        isa::FUNCT_SLL | isa::FUNCT_SRL => {
            let ops = tokens::operands(operand_text, 3)?;
            let rd = register(ops[0])?;
            let rt = register(ops[1])?;
            let shamt = literal(ops[2], "sll/srl")?;
            // opcode+rs are zero: 11 leading zero bits.
            let mut word = FieldPacker::default();
            word.push(0, 11)
                .push(rt, 5)
                .push(rd, 5)
                .push(shamt as u32, 5)
                .push(code.into(), 6);
            Ok(Some(word.finish()))
        }
        _ => {
            let ops = tokens::operands(operand_text, 3)?;
            let rd = register(ops[0])?;
            let rs = register(ops[1])?;
            let rt = register(ops[2])?;
            let mut word = FieldPacker::default();
            word.push(0, 6)
                .push(rs, 5)
                .push(rt, 5)
                .push(rd, 5)
                .push(0, 5)
                .push(code.into(), 6);
            Ok(Some(word.finish()))
        }
    }
}

fn encode_i(
    code: u8,
    operand_text: &str,
    pc: u32,
    table: &LabelTable,
) -> Result<u32, EncodeError> {
    match code {
        isa::OP_BEQ | isa::OP_BNE => {
            let ops = tokens::operands(operand_text, 3)?;
            let rs = register(ops[0])?;
            let rt = register(ops[1])?;
            let target = table
                .find(ops[2])
                .ok_or_else(|| EncodeError::LabelNotFound(ops[2].to_owned()))?;
            // Signed word displacement relative to the instruction after
            // the branch.
            let next_pc = pc + 4;
            let offset = (target as i32 - next_pc as i32) / 4;
            let mut word = FieldPacker::default();
            word.push(code.into(), 6)
                .push(rs, 5)
                .push(rt, 5)
                .push(offset as u32, 16);
            Ok(word.finish())
        }
        isa::OP_LUI => {
            let ops = tokens::operands(operand_text, 2)?;
            let rt = register(ops[0])?;
            let imm = literal(ops[1], "lui")?;
            let mut word = FieldPacker::default();
            word.push(code.into(), 6)
                .push(0, 5)
                .push(rt, 5)
                .push(imm as u32, 16);
            Ok(word.finish())
        }
        isa::OP_LW | isa::OP_SW => {
            // Written `lw $t0, 4($sp)`: target register, offset literal,
            // base register.
            let ops = tokens::operands(operand_text, 3)?;
            let rt = register(ops[0])?;
            let offset = literal(ops[1], "lw/sw")?;
            let base = register(ops[2])?;
            let mut word = FieldPacker::default();
            word.push(code.into(), 6)
                .push(base, 5)
                .push(rt, 5)
                .push(offset as u32, 16);
            Ok(word.finish())
        }
        _ => {
            let ops = tokens::operands(operand_text, 3)?;
            let rt = register(ops[0])?;
            let rs = register(ops[1])?;
            let imm = literal(ops[2], "immediate")?;
            let mut word = FieldPacker::default();
            word.push(code.into(), 6)
                .push(rs, 5)
                .push(rt, 5)
                .push(imm as u32, 16);
            Ok(word.finish())
        }
    }
}

fn encode_j(code: u8, operand_text: &str, table: &LabelTable) -> Result<u32, EncodeError> {
    let ops = tokens::operands(operand_text, 1)?;
    let target = table
        .find(ops[0])
        .ok_or_else(|| EncodeError::LabelNotFound(ops[0].to_owned()))?;
    let word_address = target / 4;
    let mut word = FieldPacker::default();
    word.push(code.into(), 6).push(word_address, 26);
    Ok(word.finish())
}
