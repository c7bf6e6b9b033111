/// One source line reduced to its interesting parts: an optional leading
/// label definition and an optional instruction (mnemonic plus the raw
/// operand text that follows it). Comment text is already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub label: Option<&'a str>,
    pub instr: Option<(&'a str, &'a str)>,
}

/// Scans one raw source line. Everything from the first `#` on is comment;
/// a first token ending in `:` is a label definition (the colon may butt up
/// against the mnemonic); whatever remains starts with the mnemonic.
pub fn scan(raw: &str) -> SourceLine<'_> {
    let text = match raw.find('#') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    let mut rest = text.trim_start();

    let mut label = None;
    let token_end = rest
        .find(|c: char| c.is_whitespace() || c == ':')
        .unwrap_or(rest.len());
    if rest[token_end..].starts_with(':') {
        label = Some(&rest[..token_end]);
        rest = rest[token_end + 1..].trim_start();
    }

    let instr = if rest.is_empty() {
        None
    } else {
        let mnemonic_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        Some((&rest[..mnemonic_end], rest[mnemonic_end..].trim()))
    };

    SourceLine { label, instr }
}
