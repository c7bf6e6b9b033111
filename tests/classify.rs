use mips_rs::{classify, register_number, Format, InstrKind};

#[test]
fn r_format_mnemonics_map_to_funct_numbers() {
    assert_eq!(
        classify("add"),
        Some(Format {
            kind: InstrKind::R,
            code: 32
        })
    );
    assert_eq!(
        classify("sll"),
        Some(Format {
            kind: InstrKind::R,
            code: 0
        })
    );
    assert_eq!(
        classify("jr"),
        Some(Format {
            kind: InstrKind::R,
            code: 8
        })
    );
    assert_eq!(
        classify("sltu"),
        Some(Format {
            kind: InstrKind::R,
            code: 43
        })
    );
}

#[test]
fn i_format_mnemonics_map_to_opcodes() {
    assert_eq!(
        classify("sw"),
        Some(Format {
            kind: InstrKind::I,
            code: 43
        })
    );
    assert_eq!(
        classify("beq"),
        Some(Format {
            kind: InstrKind::I,
            code: 4
        })
    );
    assert_eq!(
        classify("lui"),
        Some(Format {
            kind: InstrKind::I,
            code: 15
        })
    );
    assert_eq!(
        classify("lw"),
        Some(Format {
            kind: InstrKind::I,
            code: 35
        })
    );
}

#[test]
fn j_format_mnemonics_map_to_opcodes() {
    assert_eq!(
        classify("j"),
        Some(Format {
            kind: InstrKind::J,
            code: 2
        })
    );
    assert_eq!(
        classify("jal"),
        Some(Format {
            kind: InstrKind::J,
            code: 3
        })
    );
}

#[test]
fn unknown_mnemonics_are_not_classified() {
    assert_eq!(classify("nope"), None);
    assert_eq!(classify("ADD"), None); // case-sensitive
    assert_eq!(classify(""), None); // empty table slots never match
}

#[test]
fn register_names_map_to_numbers() {
    assert_eq!(register_number("$zero"), Some(0));
    assert_eq!(register_number("$at"), Some(1));
    assert_eq!(register_number("$t0"), Some(8));
    assert_eq!(register_number("$t8"), Some(24));
    assert_eq!(register_number("$sp"), Some(29));
    assert_eq!(register_number("$ra"), Some(31));
}

#[test]
fn unknown_register_names_are_rejected() {
    assert_eq!(register_number("$t10"), None);
    assert_eq!(register_number("zero"), None);
    assert_eq!(register_number("$RA"), None);
}
