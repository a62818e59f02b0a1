use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnterminatedEscape,
    InvalidEscape,
    MalformedUnicodeEscape,
    UnterminatedUnicodeEscape,
    InvalidCodePoint,
}
impl ErrorKind {
    pub fn message(self) -> &'static str {
        use ErrorKind::*;
        match self {
            UnterminatedEscape => "Unterminated backslash escape",
            InvalidEscape => "Invalid backslash escape",
            MalformedUnicodeEscape => "Unicode escape must be of the form \\u{hex}",
            UnterminatedUnicodeEscape => "Missing closing } for unicode escape",
            InvalidCodePoint => "Invalid code point in unicode escape",
        }
    }
}

/// A decoding failure, located by its code point (not byte) offset into the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{} at character {offset}", .kind.message())]
pub struct DecodeError {
    kind: ErrorKind,
    offset: usize,
}
impl DecodeError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Print a compiler style diagnostic for this error to stderr. `source` is the text that
    /// was decoded, starting on line `first_line` of the input named `fname`.
    pub fn display_from_line(&self, fname: &str, source: &str, first_line: usize) {
        for line in self.render(fname, source, first_line) {
            eprintln!("{}", line);
        }
    }

    pub fn render(&self, fname: &str, source: &str, first_line: usize) -> Vec<String> {
        ErrorPrinter::new(fname, source, first_line).render(self.kind.message(), self.offset)
    }
}

struct ErrorPrinter<'a> {
    fname: &'a str,
    first_line: usize,
    // each line along with the code point offset it starts at
    lines: Vec<(&'a str, usize)>,
}
impl<'a> ErrorPrinter<'a> {
    fn new(fname: &'a str, source: &'a str, first_line: usize) -> Self {
        let mut pos = 0;
        let mut lines = Vec::new();
        for line in source.split('\n') {
            lines.push((line, pos));
            pos += line.chars().count() + 1;
        }
        Self { fname, first_line, lines }
    }

    fn render(&self, msg: &str, offset: usize) -> Vec<String> {
        const TABWIDTH: usize = 8;

        let line_no = self.lines.partition_point(|&(_, start)| start <= offset).saturating_sub(1);
        let (line, line_start) = self.lines[line_no];
        let line = line.trim_end_matches('\r');
        let target = offset - line_start;

        // convert code point positions to display columns (within the line)
        let mut col = None;
        let mut ci = 0;
        for (i, c) in line.chars().enumerate() {
            if i == target {
                col = Some(ci);
            }
            ci += if c == '\t' { TABWIDTH } else { 1 };
        }
        let col = col.unwrap_or(ci);

        let underline: String = (0..col + 1).map(|i| if i == col { '^' } else { ' ' }).collect();

        fn trim(s: &str) -> &str {
            match s.char_indices().nth(115) {
                Some((i, _)) => &s[..i],
                None => s,
            }
        }

        vec![
            format!("{}:{}:{} Error: {}", self.fname, line_no + self.first_line, col + 1, msg),
            trim(line).to_owned(),
            trim(&underline).to_owned(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message() {
        let err = DecodeError::new(ErrorKind::InvalidEscape, 4);
        assert_eq!(err.to_string(), "Invalid backslash escape at character 4");
    }

    #[test]
    fn test_render_single_line() {
        let err = DecodeError::new(ErrorKind::InvalidEscape, 3);
        let lines = err.render("<arg 1>", r#""ab\q""#, 1);
        assert_eq!(
            lines,
            vec![
                "<arg 1>:1:4 Error: Invalid backslash escape".to_owned(),
                r#""ab\q""#.to_owned(),
                "   ^".to_owned(),
            ]
        );
    }

    #[test]
    fn test_render_multi_line_and_wide_chars() {
        let source = "first\n\"東方\t\\x\"";
        // line 2 starts at code point 6; the x is at 6 + 5
        let err = DecodeError::new(ErrorKind::InvalidEscape, 11);
        let lines = err.render("in.txt", source, 1);
        assert_eq!(lines[0], "in.txt:2:13 Error: Invalid backslash escape");
        assert_eq!(lines[1], "\"東方\t\\x\"");
        assert_eq!(lines[2], format!("{}^", " ".repeat(12)));
    }

    #[test]
    fn test_render_past_end() {
        let err = DecodeError::new(ErrorKind::MalformedUnicodeEscape, 3);
        let lines = err.render("f", r#""\u"#, 1);
        assert_eq!(lines[0], "f:1:4 Error: Unicode escape must be of the form \\u{hex}");
        assert_eq!(lines[2], "   ^");
    }

    #[test]
    fn test_render_from_line() {
        let err = DecodeError::new(ErrorKind::InvalidEscape, 2);
        let lines = err.render("<stdin>", r#""\z""#, 7);
        assert_eq!(lines[0], "<stdin>:7:3 Error: Invalid backslash escape");
    }
}
