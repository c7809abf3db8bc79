//! printf-style substitution
//!
//!     Templates understand exactly three directives:
//!
//!         %d   an integer argument
//!         %s   any argument, integers are written in decimal
//!         %%   a literal percent sign
//!
//!     Arguments are consumed left to right. Missing arguments, arguments left over at the
//!     end, a string passed to `%d` and any other directive are all errors.

use crate::error::PolicyError;
use std::fmt;

/// A positional argument for a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatArg {
    Int(i64),
    Str(String),
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Int(n) => write!(f, "{}", n),
            FormatArg::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FormatArg {
    fn from(n: i64) -> Self {
        FormatArg::Int(n)
    }
}

impl From<u32> for FormatArg {
    fn from(n: u32) -> Self {
        FormatArg::Int(i64::from(n))
    }
}

impl From<&str> for FormatArg {
    fn from(s: &str) -> Self {
        FormatArg::Str(s.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(s: String) -> Self {
        FormatArg::Str(s)
    }
}

/// Substitute `args` into `template`
pub fn sprintf(template: &str, args: &[FormatArg]) -> Result<String, PolicyError> {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('%') => out.push('%'),
            Some('d') => match remaining.next() {
                Some(FormatArg::Int(n)) => out.push_str(&n.to_string()),
                Some(FormatArg::Str(s)) => {
                    return Err(PolicyError::FormatArguments(format!(
                        "'%d' expects an integer, got '{}' in '{}'",
                        s, template
                    )))
                }
                None => return Err(missing_argument(template)),
            },
            Some('s') => match remaining.next() {
                Some(arg) => out.push_str(&arg.to_string()),
                None => return Err(missing_argument(template)),
            },
            Some(other) => {
                return Err(PolicyError::FormatArguments(format!(
                    "unknown directive '%{}' in '{}'",
                    other, template
                )))
            }
            None => {
                return Err(PolicyError::FormatArguments(format!(
                    "dangling '%' at the end of '{}'",
                    template
                )))
            }
        }
    }

    let unused = remaining.count();
    if unused > 0 {
        return Err(PolicyError::FormatArguments(format!(
            "{} unused argument(s) for '{}'",
            unused, template
        )));
    }

    Ok(out)
}

fn missing_argument(template: &str) -> PolicyError {
    PolicyError::FormatArguments(format!("too few arguments for '{}'", template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("No directives", vec![], "No directives")]
    #[case("under %d.", vec![FormatArg::Int(13)], "under 13.")]
    #[case("Maximum retention time: %s", vec!["3 days".into()], "Maximum retention time: 3 days")]
    #[case("%s and %s", vec![7i64.into(), "x".into()], "7 and x")]
    #[case("reduced to 25%% precision", vec![], "reduced to 25% precision")]
    fn test_sprintf_substitutes(
        #[case] template: &str,
        #[case] args: Vec<FormatArg>,
        #[case] expected: &str,
    ) {
        assert_eq!(sprintf(template, &args).unwrap(), expected);
    }

    #[rstest]
    #[case("under %d.", vec![])]
    #[case("under %d.", vec!["thirteen".into()])]
    #[case("plain", vec![FormatArg::Int(1)])]
    #[case("100%", vec![])]
    #[case("%x marks", vec![FormatArg::Int(1)])]
    fn test_sprintf_rejects_bad_arguments(#[case] template: &str, #[case] args: Vec<FormatArg>) {
        assert!(matches!(
            sprintf(template, &args),
            Err(PolicyError::FormatArguments(_))
        ));
    }

    #[test]
    fn test_sprintf_keeps_multibyte_text() {
        assert_eq!(
            sprintf("„%s“ – %d", &["Sie".into(), 30i64.into()]).unwrap(),
            "„Sie“ – 30"
        );
    }
}
