use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    // Separators (Zs, Zl, Zp), the whole Other category (Cc, Cf, Cs, Co, Cn) and anything with White_Space
    static ref ESCAPED_RE: Regex = Regex::new(r"\A[\s\p{Z}\p{C}]\z").unwrap();
}

/// Returns true for code points that may never appear literally inside quotes
pub fn needs_escape(c: char) -> bool {
    let mut buf = [0u8; 4];
    ESCAPED_RE.is_match(c.encode_utf8(&mut buf))
}

/// Render a single code point as a backslash escape sequence.
///
/// The eight control characters with a conventional mnemonic get their two character
/// form; everything else becomes `\u{hex}` with lowercase digits and no leading zeros.
pub fn escape_char(c: char) -> Cow<'static, str> {
    match c {
        '\x07' => Cow::from(r"\a"),
        '\x08' => Cow::from(r"\b"),
        '\x0B' => Cow::from(r"\v"),
        '\x0C' => Cow::from(r"\f"),
        '\n' => Cow::from(r"\n"),
        '\r' => Cow::from(r"\r"),
        '\t' => Cow::from(r"\t"),
        '\x1B' => Cow::from(r"\e"),
        _ => Cow::from(format!("\\u{{{:x}}}", c as u32)),
    }
}
