use tracing::{debug, warn};

use crate::labels::{AddOutcome, LabelTable};
use crate::lines;

/// Pass one: scans the source once and binds every label definition to the
/// byte address of the next instruction. The program counter starts at 0 and
/// advances by 4 per instruction-bearing line; comment-only and label-only
/// lines do not advance it. A redefined label keeps its first address.
pub fn collect_labels(source: &str) -> LabelTable {
    let mut table = LabelTable::new();
    let mut pc: u32 = 0;

    for (idx, raw) in source.lines().enumerate() {
        let line = lines::scan(raw);

        if let Some(label) = line.label {
            if !label.is_empty() {
                match table.add(label, pc) {
                    AddOutcome::Added => {
                        debug!(line = idx + 1, label, address = pc, "label defined")
                    }
                    AddOutcome::Duplicate => {
                        warn!(line = idx + 1, label, "duplicate label ignored")
                    }
                }
            }
        }

        if line.instr.is_some() {
            pc += 4;
        }
    }

    table
}
