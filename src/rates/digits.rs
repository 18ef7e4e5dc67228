//! Normalization of Unicode decimal digits to ASCII
//!
//! The rate pattern's `\d` matches any Unicode decimal digit (category Nd),
//! but `str::parse` only accepts ASCII. Every Nd digit sits in a run of ten
//! consecutive code points starting at its zero, so the digit value is the
//! offset from the nearest zero below it.

use std::borrow::Cow;

/// First code point (the zero) of each run of Nd digits, ascending
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6,
    0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0,
    0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620,
    0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x10D40,
    0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0,
    0x116D0, 0x11730, 0x118E0, 0x11950, 0x11BF0, 0x11C50, 0x11D50, 0x11DA0, 0x11F50,
    0x16130, 0x16A60, 0x16AC0, 0x16B50, 0x16D70, 0x1CCF0, 0x1D7CE, 0x1D7D8, 0x1D7E2,
    0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E5F1, 0x1E950, 0x1FBF0,
];

/// Decimal value of a Unicode Nd digit, `None` for anything else
pub(crate) fn digit_value(c: char) -> Option<u32> {
    let cp = u32::from(c);
    let idx = match DIGIT_ZEROS.binary_search(&cp) {
        Ok(i) => i,
        Err(0) => return None,
        Err(i) => i - 1,
    };
    let offset = cp - DIGIT_ZEROS[idx];
    (offset < 10).then_some(offset)
}

/// Replace non-ASCII decimal digits with their ASCII equivalents
pub(crate) fn to_ascii_digits(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| match digit_value(c) {
                Some(d) if !c.is_ascii() => char::from(b'0' + d as u8),
                _ => c,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('\u{ff12}'), Some(2)); // fullwidth two
        assert_eq!(digit_value('\u{0663}'), Some(3)); // Arabic-Indic three
        assert_eq!(digit_value('\u{096F}'), Some(9)); // Devanagari nine
        assert_eq!(digit_value('\u{1D7D9}'), Some(1)); // mathematical double-struck one
        assert_eq!(digit_value('a'), None);
        assert_eq!(digit_value('\u{0669}'), Some(9));
        assert_eq!(digit_value('\u{066A}'), None); // Arabic percent sign
    }

    #[test]
    fn test_ascii_passthrough_borrows() {
        assert!(matches!(to_ascii_digits("2020"), Cow::Borrowed("2020")));
    }

    #[test]
    fn test_mixed_digits_normalized() {
        assert_eq!(to_ascii_digits("\u{ff12}\u{ff10}\u{ff12}\u{ff10}"), "2020");
        assert_eq!(to_ascii_digits("-\u{0663}.\u{0662}\u{0665}"), "-3.25");
    }
}
