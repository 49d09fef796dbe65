use crate::{ParseError, ParseErrorKind};

/// Parses `text` as a signed integer in `base` that fits in `bit_size` bits.
///
/// `text` may start with `+` or `-`. `base` is `0` (infer from prefix) or `2..=36`.
/// `bit_size` is `1..=64`, with `0` meaning 64.
///
/// With base `0`, underscores may separate digits (`"1_000"`, `"0x_ff"`); they must sit
/// between digits or directly after a base prefix.
///
/// # Errors
///
/// Returns a [`ParseError`] whose kind is:
/// - [`ParseErrorKind::Syntax`] for an empty token, a lone sign, a misplaced underscore or a
///   character that is not a digit of the resolved base
/// - [`ParseErrorKind::Range`] if the value does not fit a signed `bit_size`-bit integer
/// - [`ParseErrorKind::InvalidBase`] / [`ParseErrorKind::InvalidBitSize`] for bad arguments
pub fn parse_int(text: &str, base: u32, bit_size: u32) -> Result<i64, ParseError> {
    const FUNC: &str = "parse_int";

    if text.is_empty() {
        return Err(ParseError::new(FUNC, text, ParseErrorKind::Syntax));
    }

    let (negative, magnitude) = match text.as_bytes()[0] {
        b'+' => (false, &text[1..]),
        b'-' => (true, &text[1..]),
        _ => (false, text),
    };

    let un = match parse_magnitude(magnitude, base, bit_size) {
        Ok(un) => un,
        // Too large even unsigned; still a range failure once the sign is considered.
        Err(ParseErrorKind::Range) => u64::MAX,
        Err(kind) => return Err(ParseError::new(FUNC, text, kind)),
    };

    let bits = if bit_size == 0 { 64 } else { bit_size };
    let cutoff: u64 = 1 << (bits - 1);
    if (!negative && un >= cutoff) || (negative && un > cutoff) {
        return Err(ParseError::new(FUNC, text, ParseErrorKind::Range));
    }

    // `un == cutoff` only when negative; for 64 bits that is i64::MIN, which wraps onto itself.
    let value = un as i64;
    Ok(if negative { value.wrapping_neg() } else { value })
}

/// Parses `text` as an unsigned integer in `base` that fits in `bit_size` bits.
///
/// Same base, bit width and underscore rules as [`parse_int`]; no sign is accepted.
///
/// # Errors
///
/// As for [`parse_int`].
pub fn parse_uint(text: &str, base: u32, bit_size: u32) -> Result<u64, ParseError> {
    parse_magnitude(text, base, bit_size).map_err(|kind| ParseError::new("parse_uint", text, kind))
}

fn parse_magnitude(text: &str, base: u32, bit_size: u32) -> Result<u64, ParseErrorKind> {
    if text.is_empty() {
        return Err(ParseErrorKind::Syntax);
    }

    let inferred = base == 0;
    let (base, digits) = match base {
        2..=36 => (base, text.as_bytes()),
        0 => infer_base(text.as_bytes()),
        _ => return Err(ParseErrorKind::InvalidBase(base)),
    };

    let bits = match bit_size {
        0 => 64,
        1..=64 => bit_size,
        _ => return Err(ParseErrorKind::InvalidBitSize(bit_size)),
    };

    let radix = u64::from(base);
    // Smallest magnitude whose product with `radix` overflows u64.
    let cutoff = u64::MAX / radix + 1;
    let max_val = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };

    let mut underscores = false;
    let mut n: u64 = 0;
    for &c in digits {
        if c == b'_' && inferred {
            underscores = true;
            continue;
        }

        let d = match digit_value(c) {
            Some(d) if d < base => u64::from(d),
            _ => return Err(ParseErrorKind::Syntax),
        };

        if n >= cutoff {
            return Err(ParseErrorKind::Range);
        }
        n *= radix;

        let n1 = n.wrapping_add(d);
        if n1 < n || n1 > max_val {
            return Err(ParseErrorKind::Range);
        }
        n = n1;
    }

    if underscores && !underscores_well_placed(text.as_bytes()) {
        return Err(ParseErrorKind::Syntax);
    }

    Ok(n)
}

/// Resolves the base from a literal prefix and strips it.
///
/// The letter prefixes need at least one character after them; `"0x"` alone falls through to
/// octal with `x` as its (invalid) digit.
fn infer_base(s: &[u8]) -> (u32, &[u8]) {
    if s[0] != b'0' {
        return (10, s);
    }

    if s.len() >= 3 {
        match s[1].to_ascii_lowercase() {
            b'b' => return (2, &s[2..]),
            b'o' => return (8, &s[2..]),
            b'x' => return (16, &s[2..]),
            _ => {}
        }
    }

    (8, &s[1..])
}

fn digit_value(c: u8) -> Option<u32> {
    match c.to_ascii_lowercase() {
        c @ b'0'..=b'9' => Some(u32::from(c - b'0')),
        c @ b'a'..=b'z' => Some(u32::from(c - b'a') + 10),
        _ => None,
    }
}

/// Checks that every underscore in a base-prefixed literal sits between digits, or between the
/// base prefix and a digit.
fn underscores_well_placed(s: &[u8]) -> bool {
    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let s = match s.first() {
        Some(b'+' | b'-') => &s[1..],
        _ => s,
    };

    let mut saw = Saw::Start;
    let mut i = 0;
    let mut hex = false;

    if s.len() >= 2 && s[0] == b'0' && matches!(s[1].to_ascii_lowercase(), b'b' | b'o' | b'x') {
        i = 2;
        saw = Saw::Digit;
        hex = s[1].to_ascii_lowercase() == b'x';
    }

    for &c in &s[i..] {
        if c.is_ascii_digit() || (hex && c.to_ascii_lowercase().is_ascii_hexdigit()) {
            saw = Saw::Digit;
            continue;
        }
        if c == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
            continue;
        }
        if saw == Saw::Underscore {
            return false;
        }
        saw = Saw::Other;
    }

    saw != Saw::Underscore
}
