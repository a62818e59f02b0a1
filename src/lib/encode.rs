use super::escape::escape_char;
use super::escape::needs_escape;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum QuoteStyle {
    Bare,
    Single,
    Double,
}

/// Decide how `s` has to be quoted to survive a round trip through a shell
pub fn quote_style(s: &str) -> QuoteStyle {
    let mut needs_quoting = false;
    let mut single_quotable = true;

    for c in s.chars() {
        match c {
            '\'' | '\\' => {
                needs_quoting = true;
                single_quotable = false;
            }
            // still single quotable if it's just double quotes and spaces
            '"' | ' ' | '&' => needs_quoting = true,
            c if needs_escape(c) => {
                needs_quoting = true;
                single_quotable = false;
            }
            _ => {}
        }
        if needs_quoting && !single_quotable {
            break;
        }
    }

    if !needs_quoting {
        QuoteStyle::Bare
    } else if single_quotable {
        QuoteStyle::Single
    } else {
        QuoteStyle::Double
    }
}

pub fn encode_to(out: &mut String, s: &str) {
    let style = quote_style(s);
    tracing::trace!(?style, len = s.len(), "encode");

    match style {
        QuoteStyle::Bare => out.push_str(s),
        QuoteStyle::Single => {
            out.push('\'');
            out.push_str(s);
            out.push('\'');
        }
        QuoteStyle::Double => {
            out.push('"');
            for c in s.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    // a plain space reads better than \u{20}
                    ' ' => out.push(' '),
                    '$' => out.push_str("\\$"),
                    '`' => out.push_str("\\`"),
                    c if needs_escape(c) => out.push_str(&escape_char(c)),
                    c => out.push(c),
                }
            }
            out.push('"');
        }
    }
}

pub fn encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    encode_to(&mut out, s);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_style() {
        assert_eq!(quote_style(""), QuoteStyle::Bare);
        assert_eq!(quote_style("hello"), QuoteStyle::Bare);
        assert_eq!(quote_style("$HOME"), QuoteStyle::Bare);
        assert_eq!(quote_style("東方"), QuoteStyle::Bare);
        assert_eq!(quote_style("a b"), QuoteStyle::Single);
        assert_eq!(quote_style("a&b"), QuoteStyle::Single);
        assert_eq!(quote_style(r#"say "hi""#), QuoteStyle::Single);
        assert_eq!(quote_style("it's"), QuoteStyle::Double);
        assert_eq!(quote_style(r"C:\"), QuoteStyle::Double);
        assert_eq!(quote_style("a\tb"), QuoteStyle::Double);
        assert_eq!(quote_style("a\u{A0}b"), QuoteStyle::Double);
        assert_eq!(quote_style("\u{202E}RTL"), QuoteStyle::Double);
    }

    #[test]
    fn test_encode() {
        let cases = [
            ("東方", "東方"),
            ("\"'", r#""\"'""#),
            ("\\", r#""\\""#),
            ("spaces only", "'spaces only'"),
            ("cash $ money", "'cash $ money'"),
            ("some\ttabs", r#""some\ttabs""#),
            ("💩", "💩"),
            ("\u{202e}RTL", r#""\u{202e}RTL""#),
            ("no\u{202b}space", r#""no\u{202b}space""#),
            ("cash $ money $$ \t", r#""cash \$ money \$\$ \t""#),
            ("back ` tick `` \t", r#""back \` tick \`\` \t""#),
            (
                "\u{7}\u{8}\u{b}\u{c}\u{a}\u{d}\u{9}\u{1b}\u{1b}\u{5c}\u{27}\u{22}",
                r#""\a\b\v\f\n\r\t\e\e\\'\"""#,
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(encode(input), expected, "encode({:?})", input);
        }
    }

    #[test]
    fn test_encode_mnemonics() {
        let pairs = [
            ('\x07', r#""\a""#),
            ('\x08', r#""\b""#),
            ('\x0B', r#""\v""#),
            ('\x0C', r#""\f""#),
            ('\n', r#""\n""#),
            ('\r', r#""\r""#),
            ('\t', r#""\t""#),
            ('\x1B', r#""\e""#),
        ];
        for (c, expected) in pairs {
            assert_eq!(encode(&c.to_string()), expected);
        }
    }

    #[test]
    fn test_encode_to_appends() {
        let mut out = String::from("echo ");
        encode_to(&mut out, "two words");
        out.push(' ');
        encode_to(&mut out, "plain");
        assert_eq!(out, "echo 'two words' plain");
    }
}
