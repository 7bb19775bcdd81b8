//! Building a raw command line from arguments, the inverse of `tokenize`.

use std::borrow::Cow;
use std::iter::repeat;

/// Quote a single argument so that `tokenize` reads it back unchanged.
///
/// Arguments that are non-empty and free of whitespace and quotes are
/// returned as-is. Everything else is wrapped in quotes, with backslashes
/// doubled where they precede a quote.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    if !arg.is_empty() && !arg.contains([' ', '\t', '\n', '\u{b}', '"']) {
        return Cow::Borrowed(arg);
    }

    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    let mut backslashes = 0;
    for ch in arg.chars() {
        match ch {
            '\\' => backslashes += 1,
            '"' => {
                out.extend(repeat('\\').take(backslashes * 2 + 1));
                out.push('"');
                backslashes = 0;
            }
            _ => {
                out.extend(repeat('\\').take(backslashes));
                out.push(ch);
                backslashes = 0;
            }
        }
    }
    // Backslashes before the closing quote must not escape it
    out.extend(repeat('\\').take(backslashes * 2));
    out.push('"');
    Cow::Owned(out)
}

/// Quote each argument and join them with single spaces.
pub fn join_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, arg) in args.into_iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&quote_arg(arg.as_ref()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::tokenize;

    #[test]
    fn plain_argument_is_borrowed() {
        assert!(matches!(quote_arg("plain"), Cow::Borrowed("plain")));
        assert!(matches!(quote_arg(r"C:\dir\"), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_argument_is_quoted() {
        assert_eq!(quote_arg(""), r#""""#);
    }

    #[test]
    fn whitespace_is_quoted() {
        assert_eq!(quote_arg("a b"), r#""a b""#);
        assert_eq!(quote_arg("a\tb"), "\"a\tb\"");
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote_arg(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote_arg(r#"a\"b"#), r#""a\\\"b""#);
    }

    #[test]
    fn trailing_backslashes_are_doubled() {
        assert_eq!(quote_arg(r"dir name\"), r#""dir name\\""#);
    }

    #[test]
    fn join_reads_back_through_tokenize() {
        let cases: Vec<Vec<&str>> = vec![
            vec!["prog", "a", "b"],
            vec!["prog", "", "x y", ""],
            vec![r"C:\Program Files\app\", r#"say "hi""#],
            vec![r#"\\"#, r#"\""#, r#"\\\""#, r#""""#],
            vec!["tab\there", "new\nline", "\u{b}"],
            vec!["ünïcödé arg", "中文"],
        ];
        for args in cases {
            let line = join_args(&args);
            assert_eq!(tokenize(&line).unwrap(), args, "line: {line}");
        }
    }
}
