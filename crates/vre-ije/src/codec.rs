//! Single-slot codec helpers.
//!
//! Every fixed-width slot is either left-justified text (space-padded on the
//! right) or a right-justified numeric (zero-padded on the left). Overlong
//! values truncate to the declared length; truncation is accepted data loss
//! in these legacy formats and never disturbs neighboring slots.

/// Render `value` left-justified in a slot of exactly `length` characters.
pub fn left_justified(value: &str, length: usize) -> String {
    let mut out = String::with_capacity(length);
    let mut count = 0;
    for ch in value.chars().take(length) {
        out.push(ch);
        count += 1;
    }
    for _ in count..length {
        out.push(' ');
    }
    out
}

/// Render `value` right-justified and zero-filled in a slot of exactly
/// `length` characters.
pub fn right_zero(value: &str, length: usize) -> String {
    let count = value.chars().count();
    if count >= length {
        value.chars().take(length).collect()
    } else {
        let mut out = String::with_capacity(length);
        for _ in 0..length - count {
            out.push('0');
        }
        out.push_str(value);
        out
    }
}

/// Decode a left-justified slot: strip the padding.
pub fn trim_field(text: &str) -> String {
    text.trim().to_string()
}

/// Decode a right-justified zero-filled slot: strip padding zeros.
///
/// An all-zero slot decodes to empty, the same as all-space: zero is the
/// fill an encoder writes for an absent numeric, and none of the numeric
/// slots carry a meaningful zero value.
pub fn trim_zeros(text: &str) -> String {
    text.trim().trim_start_matches('0').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_justified_pads_and_truncates() {
        assert_eq!(left_justified("AB", 4), "AB  ");
        assert_eq!(left_justified("ABCDEF", 4), "ABCD");
        assert_eq!(left_justified("", 3), "   ");
    }

    #[test]
    fn left_justified_counts_chars_not_bytes() {
        assert_eq!(left_justified("Añó", 5), "Añó  ");
        assert_eq!(left_justified("Añó", 2), "Añ");
    }

    #[test]
    fn right_zero_pads_and_truncates() {
        assert_eq!(right_zero("42", 6), "000042");
        assert_eq!(right_zero("", 4), "0000");
        assert_eq!(right_zero("1234567", 6), "123456");
    }

    #[test]
    fn trim_field_strips_padding() {
        assert_eq!(trim_field("AB  "), "AB");
        assert_eq!(trim_field("  AB"), "AB");
        assert_eq!(trim_field("    "), "");
    }

    #[test]
    fn trim_zeros_treats_zero_fill_as_absent() {
        assert_eq!(trim_zeros("000042"), "42");
        assert_eq!(trim_zeros("000000"), "");
        assert_eq!(trim_zeros("      "), "");
        assert_eq!(trim_zeros(" 00190"), "190");
    }
}
