//! Placeholder syntax detection

/// Placeholder syntax used by a SQL template.
///
/// A template is [`Numbered`](PlaceholderStyle::Numbered) as soon as it holds a
/// single `$` directly followed by an ASCII digit, anywhere in the text.
/// Everything else is treated as [`Sequential`](PlaceholderStyle::Sequential),
/// including templates with no placeholders at all.
///
/// ```
/// use sqlog_types::PlaceholderStyle;
///
/// assert_eq!(PlaceholderStyle::detect("id = $1"), PlaceholderStyle::Numbered);
/// assert_eq!(PlaceholderStyle::detect("id = ?"), PlaceholderStyle::Sequential);
/// assert_eq!(PlaceholderStyle::detect("price = '$'"), PlaceholderStyle::Sequential);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlaceholderStyle {
    /// `?` markers bound in order of appearance
    #[default]
    Sequential,
    /// `$1`, `$2`, ... markers bound by index
    Numbered,
}

impl PlaceholderStyle {
    /// Detect the style of `template`.
    #[must_use]
    pub fn detect(template: &str) -> Self {
        let bytes = template.as_bytes();
        let numbered = bytes
            .windows(2)
            .any(|pair| pair[0] == b'$' && pair[1].is_ascii_digit());

        if numbered {
            PlaceholderStyle::Numbered
        } else {
            PlaceholderStyle::Sequential
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlaceholderStyle::Sequential => "sequential",
            PlaceholderStyle::Numbered => "numbered",
        }
    }
}

impl core::fmt::Display for PlaceholderStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_numbered_anywhere() {
        assert_eq!(
            PlaceholderStyle::detect("SELECT * FROM t WHERE a = ? AND b = $2"),
            PlaceholderStyle::Numbered
        );
        assert_eq!(PlaceholderStyle::detect("$0"), PlaceholderStyle::Numbered);
    }

    #[test]
    fn dollar_without_digit_is_sequential() {
        assert_eq!(PlaceholderStyle::detect(""), PlaceholderStyle::Sequential);
        assert_eq!(PlaceholderStyle::detect("$"), PlaceholderStyle::Sequential);
        assert_eq!(
            PlaceholderStyle::detect("SELECT $$body$$, ?"),
            PlaceholderStyle::Sequential
        );
        assert_eq!(
            PlaceholderStyle::detect("$a1"),
            PlaceholderStyle::Sequential
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&PlaceholderStyle::Numbered).unwrap(),
            "\"numbered\""
        );
        let style: PlaceholderStyle = serde_json::from_str("\"sequential\"").unwrap();
        assert_eq!(style, PlaceholderStyle::Sequential);
        assert_eq!(style.to_string(), style.as_str());
    }
}
