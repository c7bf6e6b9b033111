use std::fmt;

use tracing::debug;

use crate::encode::{self, EncodeError};
use crate::isa;
use crate::labels::LabelTable;
use crate::lines;
use crate::pass1;

/// One reported per-line problem. The line number is 1-based, as an editor
/// would show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub error: EncodeError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error on line {}: {}", self.line, self.error)
    }
}

/// The result of pass two: the encoded instruction words in source order,
/// plus every diagnostic raised along the way. Diagnostics never abort
/// assembly; the offending lines simply emit nothing.
#[derive(Debug, Default)]
pub struct Assembly {
    pub words: Vec<u32>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Assembly {
    /// Renders the instruction stream: one 32-digit binary line per word.
    pub fn render(&self) -> String {
        let mut text = String::with_capacity(self.words.len() * 33);
        for word in &self.words {
            text.push_str(&encode::render_word(*word));
            text.push('\n');
        }
        text
    }
}

/// Pass two: re-reads the source against a populated label table and encodes
/// each instruction line. The program counter advances by 4 on every
/// instruction-bearing line, including lines that fail to encode, matching
/// pass one's address assignment; comment-only and label-only lines do not
/// advance it.
pub fn pass2(source: &str, table: &LabelTable) -> Assembly {
    let mut out = Assembly::default();
    let mut pc: u32 = 0;

    for (idx, raw) in source.lines().enumerate() {
        let line_num = idx + 1;
        let Some((mnemonic, operand_text)) = lines::scan(raw).instr else {
            continue;
        };
        debug!(line = line_num, mnemonic, "encoding instruction");

        match isa::classify(mnemonic) {
            None => out.diagnostics.push(Diagnostic {
                line: line_num,
                error: EncodeError::UnknownMnemonic(mnemonic.to_owned()),
            }),
            Some(format) => match encode::encode(format, operand_text, pc, table) {
                Ok(Some(word)) => out.words.push(word),
                Ok(None) => {} // valid line with nothing to emit
                Err(error) => out.diagnostics.push(Diagnostic {
                    line: line_num,
                    error,
                }),
            },
        }

        pc += 4;
    }

    out
}

/// Runs both passes over the same source.
pub fn assemble(source: &str) -> Assembly {
    let table = pass1::collect_labels(source);
    pass2(source, &table)
}
