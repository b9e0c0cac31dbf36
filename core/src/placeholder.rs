//! Placeholder substitution
//!
//! Both engines are a single left-to-right pass over the template. Inserted
//! values are never rescanned, so a value that itself contains `?` or `$2`
//! comes out verbatim.

use sqlog_types::PlaceholderStyle;

/// Substitute rendered values into `template`, detecting the placeholder style.
///
/// ```
/// use sqlog_core::placeholder::substitute;
///
/// assert_eq!(substitute("id = ? AND name = ?", &["42", "'a'"]), "id = 42 AND name = 'a'");
/// assert_eq!(substitute("id = $1", &["7"]), "id = 7");
/// ```
pub fn substitute<S: AsRef<str>>(template: &str, values: &[S]) -> String {
    match PlaceholderStyle::detect(template) {
        PlaceholderStyle::Numbered => substitute_numbered(template, values),
        PlaceholderStyle::Sequential => substitute_sequential(template, values),
    }
}

/// Replace each `?` with the next value.
///
/// Markers left over once values run out are removed. Values left over once
/// markers run out are ignored.
pub fn substitute_sequential<S: AsRef<str>>(template: &str, values: &[S]) -> String {
    let mut out = String::with_capacity(output_capacity(template, values));
    let mut values = values.iter();
    let mut rest = template;

    while let Some(pos) = rest.find('?') {
        out.push_str(&rest[..pos]);
        if let Some(value) = values.next() {
            out.push_str(value.as_ref());
        }
        rest = &rest[pos + 1..];
    }
    out.push_str(rest);

    out
}

/// Replace each `$n` with value `n` (1-based).
///
/// The whole digit run after `$` is the index, so `$1` followed by `0` is
/// `$10`, never value 1 then a literal `0`. Indexes that are out of range or
/// written with a leading zero stay as they are.
pub fn substitute_numbered<S: AsRef<str>>(template: &str, values: &[S]) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(output_capacity(template, values));
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }

        let digits_start = i + 1;
        let digits_end = bytes[digits_start..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map_or(bytes.len(), |n| digits_start + n);

        if let Some(value) = numbered_value(&template[digits_start..digits_end], values) {
            out.push_str(&template[literal_start..i]);
            out.push_str(value);
            literal_start = digits_end;
        }
        i = digits_end.max(i + 1);
    }
    out.push_str(&template[literal_start..]);

    out
}

fn numbered_value<'v, S: AsRef<str>>(digits: &str, values: &'v [S]) -> Option<&'v str> {
    if digits.starts_with('0') {
        return None;
    }
    let index: usize = digits.parse().ok()?;
    values.get(index.checked_sub(1)?).map(AsRef::as_ref)
}

fn output_capacity<S: AsRef<str>>(template: &str, values: &[S]) -> usize {
    template.len() + values.iter().map(|v| v.as_ref().len()).sum::<usize>()
}
