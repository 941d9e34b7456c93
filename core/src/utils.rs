//! Utility functions and types.

use std::fmt::Debug;

/// Redact a secret for `Debug` output.
///
/// Values shorter than 12 characters are hidden entirely. Longer values keep
/// their first and last three characters so two redacted keys can still be
/// told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars = self.0.chars().count();
        if chars == 0 {
            return f.write_str("EMPTY");
        }
        if chars < 12 {
            return f.write_str("***");
        }

        // Slice on char boundaries, secrets may be any utf-8.
        let head: String = self.0.chars().take(3).collect();
        let tail: String = self.0.chars().skip(chars - 3).collect();
        write!(f, "{head}***{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "EMPTY" ; "empty")]
    #[test_case("Short", "***" ; "short")]
    #[test_case("HelloWorld", "***" ; "just under the limit")]
    #[test_case("Hello World!", "Hel***ld!" ; "at the limit")]
    #[test_case("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY", "wJa***KEY" ; "secret key")]
    #[test_case("ключ-доступа-сервиса", "клю***иса" ; "multi byte")]
    fn test_redact(input: &str, expected: &str) {
        assert_eq!(format!("{:?}", Redact::from(input)), expected);
    }

    #[test]
    fn test_redact_option() {
        assert_eq!(format!("{:?}", Redact::from(&None::<String>)), "EMPTY");
        assert_eq!(
            format!("{:?}", Redact::from(&Some("token".to_string()))),
            "***"
        );
    }
}
