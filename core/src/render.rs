//! Per-argument rendering
//!
//! | Variant     | Rendered as                                   |
//! |-------------|-----------------------------------------------|
//! | `Null`      | `NULL`                                        |
//! | `Timestamp` | `'YYYY-MM-DD HH:MM:SS'`                       |
//! | `Bytes`     | `'<decoded text>'` or `'<binary>'`            |
//! | `Valuer`    | `'<accessor result>'`, or `NULL`              |
//! | `Primitive` | natural form, unquoted                        |
//! | `Text`      | `'<text>'`                                    |
//!
//! Embedded quotes are not escaped. The output is for reading, not for
//! pasting back into a database.

use compact_str::{CompactString, format_compact};
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::value::LogValue;

/// Timestamp layout used for both argument values and the log banner.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const NULL: &str = "NULL";

/// Stand-in for byte payloads that would put raw binary into the log.
pub const BINARY_PLACEHOLDER: &str = "'<binary>'";

/// Render one argument.
///
/// ```
/// use sqlog_core::render::render_value;
/// use sqlog_core::value::LogValue;
///
/// assert_eq!(render_value(&LogValue::from(42)), "42");
/// assert_eq!(render_value(&LogValue::from("a'b")), "'a'b'");
/// assert_eq!(render_value(&LogValue::from(vec![0xffu8, 0x00])), "'<binary>'");
/// assert_eq!(render_value(&LogValue::from(None::<i32>)), "NULL");
/// ```
pub fn render_value(value: &LogValue<'_>) -> CompactString {
    match value {
        LogValue::Null => CompactString::const_new(NULL),
        LogValue::Timestamp(ts) => format_compact!("'{}'", ts.format(TIMESTAMP_FORMAT)),
        LogValue::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) if is_printable(text) => format_compact!("'{text}'"),
            _ => CompactString::const_new(BINARY_PLACEHOLDER),
        },
        LogValue::Valuer(valuer) => match valuer.value() {
            Ok(Some(scalar)) => format_compact!("'{scalar}'"),
            Ok(None) => CompactString::const_new(NULL),
            Err(err) => {
                tracing::trace!(error = %err, valuer = ?valuer, "sql valuer failed, logging NULL");
                CompactString::const_new(NULL)
            }
        },
        LogValue::Primitive(p) => format_compact!("{p}"),
        LogValue::Text(text) => format_compact!("'{text}'"),
    }
}

/// `true` when every character is a letter, mark, number, punctuation,
/// symbol or the ASCII space.
///
/// Control, format, private-use and unassigned code points are unprintable,
/// as is every separator other than U+0020.
pub fn is_printable(text: &str) -> bool {
    text.chars().all(is_printable_char)
}

fn is_printable_char(c: char) -> bool {
    c == ' '
        || !matches!(
            get_general_category(c),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
                | GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
}
