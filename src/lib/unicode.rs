use super::error::DecodeError;
use super::error::ErrorKind;

/// Parse a `\u{hex}` escape given the index of the `u`.
///
/// Returns the decoded character along with the index of the closing brace.
pub fn parse_unicode_escape(s: &[char], start: usize) -> Result<(char, usize), DecodeError> {
    let mut i = start + 1; // pass the u
    if s.get(i) != Some(&'{') {
        return Err(DecodeError::new(ErrorKind::MalformedUnicodeEscape, i));
    }

    i += 1;
    let frag_start = i;
    while i < s.len() && s[i] != '}' {
        i += 1;
    }
    if i == s.len() {
        return Err(DecodeError::new(ErrorKind::UnterminatedUnicodeEscape, start));
    }

    let c = hex_scalar(&s[frag_start..i]).ok_or(DecodeError::new(ErrorKind::InvalidCodePoint, i))?;
    Ok((c, i))
}

fn hex_scalar(fragment: &[char]) -> Option<char> {
    if fragment.is_empty() || !fragment.iter().all(char::is_ascii_hexdigit) {
        return None;
    }

    let mut padded: String = std::iter::repeat('0').take(8usize.saturating_sub(fragment.len())).collect();
    padded.extend(fragment);

    // anything past 8 digits is left over and makes the escape invalid
    let (digits, residue) = padded.split_at(8);
    if !residue.is_empty() {
        return None;
    }
    let val = u32::from_str_radix(digits, 16).ok()?;
    char::from_u32(val)
}
