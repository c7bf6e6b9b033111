use mips_rs::encode::{encode, render_word, EncodeError};
use mips_rs::tokens::OperandError;
use mips_rs::{classify, LabelTable};

// Encode through the public classify + encode path, as the driver does.
fn enc(
    mnemonic: &str,
    operands: &str,
    pc: u32,
    table: &LabelTable,
) -> Result<Option<u32>, EncodeError> {
    encode(classify(mnemonic).unwrap(), operands, pc, table)
}

// For instructions that never consult the table or the PC.
fn bits(mnemonic: &str, operands: &str) -> String {
    let table = LabelTable::new();
    render_word(enc(mnemonic, operands, 0, &table).unwrap().unwrap())
}

#[test]
fn arithmetic_r_format_layout() {
    assert_eq!(bits("add", "$t0, $t1, $t2"), "00000001001010100100000000100000");
    assert_eq!(bits("sub", "$s0, $s1, $s2"), "00000010001100101000000000100010");
    assert_eq!(bits("nor", "$t0, $t1, $t2"), "00000001001010100100000000100111");
}

#[test]
fn shift_r_format_layout() {
    assert_eq!(bits("sll", "$t0, $t1, 4"), "00000000000010010100000100000000");
    assert_eq!(bits("srl", "$t0, $t1, 2"), "00000000000010010100000010000010");
}

#[test]
fn jr_encodes_only_through_ra() {
    assert_eq!(bits("jr", "$ra"), "00000011111000000000000000001000");

    // Any other valid register is accepted but produces no word, and is
    // not a diagnostic.
    let table = LabelTable::new();
    assert_eq!(enc("jr", "$t0", 0, &table), Ok(None));
}

#[test]
fn immediate_i_format_layout() {
    assert_eq!(bits("addi", "$t0, $t1, 12"), "00100001001010000000000000001100");
    assert_eq!(bits("ori", "$t0, $t1, 255"), "00110101001010000000000011111111");
}

#[test]
fn negative_immediate_wraps_to_two_complement() {
    assert_eq!(bits("addi", "$t0, $t1, -1"), "00100001001010001111111111111111");
}

#[test]
fn lui_zeroes_the_source_field() {
    assert_eq!(bits("lui", "$t0, 100"), "00111100000010000000000001100100");
}

#[test]
fn load_store_base_offset_layout() {
    assert_eq!(bits("lw", "$t0, 4($sp)"), "10001111101010000000000000000100");
    assert_eq!(bits("sw", "$t0, 8($sp)"), "10101111101010000000000000001000");
}

#[test]
fn branch_offset_is_word_displacement_from_next_pc() {
    let mut table = LabelTable::new();
    table.add("end", 1050);

    // (1050 - (1040 + 4)) / 4 = 1 in truncating division.
    let word = enc("beq", "$t0, $t1, end", 1040, &table).unwrap().unwrap();
    assert_eq!(render_word(word), "00010001000010010000000000000001");
}

#[test]
fn backward_branch_encodes_negative_offset() {
    let mut table = LabelTable::new();
    table.add("top", 0);

    // (0 - 12) / 4 = -3 -> 0xFFFD in the 16-bit field.
    let word = enc("bne", "$t0, $t1, top", 8, &table).unwrap().unwrap();
    assert_eq!(render_word(word), "00010101000010011111111111111101");
}

#[test]
fn jump_uses_truncated_word_address() {
    let mut table = LabelTable::new();
    table.add("main", 1025);
    table.add("end", 1050);

    // 1025 / 4 = 256
    let word = enc("j", "main", 0, &table).unwrap().unwrap();
    assert_eq!(render_word(word), "00001000000000000000000100000000");

    // 1050 / 4 = 262
    let word = enc("jal", "end", 0, &table).unwrap().unwrap();
    assert_eq!(render_word(word), "00001100000000000000000100000110");
}

#[test]
fn encoding_is_deterministic() {
    let mut table = LabelTable::new();
    table.add("loop", 8);

    let first = enc("beq", "$a0, $a1, loop", 16, &table).unwrap();
    let second = enc("beq", "$a0, $a1, loop", 16, &table).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_register_is_reported() {
    let table = LabelTable::new();
    assert_eq!(
        enc("add", "$t0, $t10, $t2", 0, &table),
        Err(EncodeError::UnknownRegister("$t10".to_owned()))
    );
}

#[test]
fn missing_label_is_reported() {
    let table = LabelTable::new();
    assert_eq!(
        enc("beq", "$t0, $t1, nowhere", 0, &table),
        Err(EncodeError::LabelNotFound("nowhere".to_owned()))
    );
    assert_eq!(
        enc("j", "nowhere", 0, &table),
        Err(EncodeError::LabelNotFound("nowhere".to_owned()))
    );
}

#[test]
fn register_where_literal_is_reported() {
    let table = LabelTable::new();
    assert_eq!(
        enc("sll", "$t0, $t1, $t2", 0, &table),
        Err(EncodeError::RegisterWhereLiteral {
            token: "$t2".to_owned(),
            context: "sll/srl",
        })
    );
    assert_eq!(
        enc("lui", "$t0, $t1", 0, &table),
        Err(EncodeError::RegisterWhereLiteral {
            token: "$t1".to_owned(),
            context: "lui",
        })
    );
}

#[test]
fn malformed_literal_is_reported() {
    let table = LabelTable::new();
    assert_eq!(
        enc("addi", "$t0, $t1, twelve", 0, &table),
        Err(EncodeError::BadLiteral("twelve".to_owned()))
    );
}

#[test]
fn operand_count_mismatch_is_reported() {
    let table = LabelTable::new();
    assert_eq!(
        enc("add", "$t0, $t1", 0, &table),
        Err(EncodeError::Operands(OperandError::Count {
            expected: 3,
            found: 2
        }))
    );
    assert_eq!(
        enc("jr", "$ra, $t0", 0, &table),
        Err(EncodeError::Operands(OperandError::Count {
            expected: 1,
            found: 2
        }))
    );
}
