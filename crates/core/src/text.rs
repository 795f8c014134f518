//! Lenient text helpers shared by validation and query parsing.

/// Characters treated as blank: Unicode whitespace plus the byte-order mark.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank)
}

pub fn trim_blank_start(s: &str) -> &str {
    s.trim_start_matches(is_blank)
}

/// Read a whole string as a number.
///
/// Accepts blank-padded decimal literals (`" 12.5 "`, `"1e3"`, `".5"`),
/// `Infinity` with an optional sign, and unsigned `0x`/`0o`/`0b` integers.
/// A blank string reads as zero. Anything else is `None`.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = trim_blank(s);
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_radix_literal(s) {
        return value;
    }

    // `f64::from_str` also takes "inf"/"nan"; only plain literals pass here.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

/// `Some(result)` when `s` carries a radix prefix, `None` otherwise.
fn parse_radix_literal(s: &str) -> Option<Option<f64>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits_value(digits, radix))
}

/// Value of `digits` in `radix`; `None` on any non-digit.
pub fn digits_value(digits: &str, radix: u32) -> Option<f64> {
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
