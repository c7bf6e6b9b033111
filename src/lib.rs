pub mod encode;
pub mod isa;
pub mod labels;
pub mod lines;
pub mod pass1;
pub mod pass2;
pub mod tokens;

pub use encode::EncodeError;
pub use isa::{classify, register_number, Format, InstrKind};
pub use labels::{AddOutcome, LabelEntry, LabelTable};
pub use pass2::{assemble, Assembly, Diagnostic};
