use super::error::DecodeError;
use super::error::ErrorKind;
use super::unicode::parse_unicode_escape;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum QuoteState {
    Unquoted,
    SingleQuoted,
    DoubleQuoted,
}

/// Undo shell style quoting, joining adjacent quoted and unquoted runs.
///
/// Offsets in the returned error count code points. Input that ends inside an open quote
/// is accepted as is.
pub fn decode(s: &str) -> Result<String, DecodeError> {
    decode_sub(s).map_err(|err| {
        tracing::debug!(kind = ?err.kind(), offset = err.offset(), "decode failed");
        err
    })
}

fn decode_sub(s: &str) -> Result<String, DecodeError> {
    use QuoteState::*;

    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut state = Unquoted;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match state {
            Unquoted => match c {
                '\'' => state = SingleQuoted,
                '"' => state = DoubleQuoted,
                _ => out.push(c),
            },
            SingleQuoted => match c {
                '\'' => state = Unquoted,
                _ => out.push(c),
            },
            DoubleQuoted => match c {
                '"' => state = Unquoted,
                '\\' => {
                    if i + 1 == chars.len() {
                        return Err(DecodeError::new(ErrorKind::UnterminatedEscape, i));
                    }
                    i += 1;
                    match chars[i] {
                        'a' => out.push('\x07'),
                        'b' => out.push('\x08'),
                        'v' => out.push('\x0B'),
                        'f' => out.push('\x0C'),
                        'n' => out.push('\n'),
                        'r' => out.push('\r'),
                        't' => out.push('\t'),
                        'e' | 'E' => out.push('\x1B'),
                        c @ ('\\' | '\'' | '"' | '$' | '`' | ' ') => out.push(c),
                        'u' => {
                            let (c, end) = parse_unicode_escape(&chars, i)?;
                            out.push(c);
                            i = end;
                        }
                        _ => return Err(DecodeError::new(ErrorKind::InvalidEscape, i)),
                    }
                }
                _ => out.push(c),
            },
        }
        i += 1;
    }

    Ok(out)
}
