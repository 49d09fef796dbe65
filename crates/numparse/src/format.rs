use crate::FormatError;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders `value` in `base` (2 to 36) using lowercase letters and a leading `-` for negatives.
///
/// # Errors
///
/// Returns [`FormatError::InvalidBase`] if `base` is outside `[2, 36]`.
pub fn format_int(value: i64, base: u32) -> Result<String, FormatError> {
    format_magnitude(value.unsigned_abs(), value < 0, base)
}

/// Renders `value` in `base` (2 to 36) using lowercase letters.
///
/// # Errors
///
/// Returns [`FormatError::InvalidBase`] if `base` is outside `[2, 36]`.
pub fn format_uint(value: u64, base: u32) -> Result<String, FormatError> {
    format_magnitude(value, false, base)
}

fn format_magnitude(mut u: u64, negative: bool, base: u32) -> Result<String, FormatError> {
    if !(2..=36).contains(&base) {
        return Err(FormatError::InvalidBase(base));
    }

    let radix = u64::from(base);
    // 64 binary digits plus a sign
    let mut buf = [0u8; 65];
    let mut i = buf.len();

    loop {
        i -= 1;
        buf[i] = DIGITS[(u % radix) as usize];
        u /= radix;
        if u == 0 {
            break;
        }
    }

    if negative {
        i -= 1;
        buf[i] = b'-';
    }

    Ok(buf[i..].iter().map(|&b| char::from(b)).collect())
}
