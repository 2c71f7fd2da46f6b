//! Color token validation.

use std::fmt;

use anyhow::Result;

/// A validated 24-bit RGB color token.
///
/// Holds exactly 6 hexadecimal digits with no `#` prefix, in the case the
/// client supplied them. This is the only color representation allowed into
/// an argument list for the backlight control utility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorValue(String);

impl ColorValue {
    /// Parses a `ColorValue` from an untrusted client-supplied string.
    ///
    /// Surrounding whitespace is stripped; after that the token must be
    /// exactly 6 characters, all in `[0-9a-fA-F]`. Anything else is
    /// rejected, so no raw client input ever reaches the process boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbd_led_web::models::ColorValue;
    ///
    /// let color = ColorValue::parse("AABBCC").unwrap();
    /// assert_eq!(color.as_str(), "AABBCC");
    ///
    /// assert!(ColorValue::parse("#ff0000").is_err());
    /// assert!(ColorValue::parse("xyz123").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not exactly 6 hex digits.
    pub fn parse(raw: &str) -> Result<Self> {
        let token = raw.trim();

        if token.len() != 6 {
            anyhow::bail!("invalid color '{token}': expected exactly 6 hex digits");
        }

        if !token.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("invalid color '{token}': non-hexadecimal character");
        }

        Ok(Self(token.to_string()))
    }

    /// Returns the validated 6-digit token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_lowercase() {
        let color = ColorValue::parse("ff0000").unwrap();
        assert_eq!(color.as_str(), "ff0000");
    }

    #[test]
    fn test_parse_valid_uppercase() {
        let color = ColorValue::parse("AABBCC").unwrap();
        assert_eq!(color.as_str(), "AABBCC");
    }

    #[test]
    fn test_parse_preserves_mixed_case() {
        let color = ColorValue::parse("AaBbCc").unwrap();
        assert_eq!(color.as_str(), "AaBbCc");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let color = ColorValue::parse(" 00ff00 ").unwrap();
        assert_eq!(color.as_str(), "00ff00");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(ColorValue::parse("").is_err());
        assert!(ColorValue::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(ColorValue::parse("fff").is_err());
        assert!(ColorValue::parse("ff000").is_err());
        assert!(ColorValue::parse("ff00000").is_err());
        assert!(ColorValue::parse("ff0000ff0000").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(ColorValue::parse("xyz123").is_err());
        assert!(ColorValue::parse("ff00g0").is_err());
        assert!(ColorValue::parse("#ff000").is_err());
        assert!(ColorValue::parse("#ff0000").is_err());
    }

    #[test]
    fn test_parse_rejects_injection_attempts() {
        assert!(ColorValue::parse("; rm -rf").is_err());
        assert!(ColorValue::parse("$(id)").is_err());
        assert!(ColorValue::parse("ff0000 -e").is_err());
        assert!(ColorValue::parse("`true`").is_err());
    }
}
