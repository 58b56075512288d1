//! Integer parsing with Go `strconv` semantics

use super::errors::{NumError, NumErrorCause};

const FN_PARSE_INT: &str = "parse_int";
const FN_PARSE_UINT: &str = "parse_uint";

/// Interprets a string s in the given base (0, 2 to 36) and
/// bit size (0 to 64) and returns the corresponding value.
///
/// The string may begin with a leading sign: "+" or "-".
///
/// If the base argument is 0, the true base is implied by the string's
/// prefix following the sign (if present): 2 for "0b", 8 for "0" or "0o",
/// 16 for "0x", and 10 otherwise. Also, for argument base 0 only,
/// underscore characters are permitted between digits.
///
/// Bit sizes 0, 8, 16, 32 and 64 correspond to the platform word,
/// i8, i16, i32 and i64. Above 64 is an error.
///
/// On overflow the error carries [`NumErrorCause::OutOfRangeSigned`] with
/// the maximum magnitude value of the requested size and sign.
pub fn parse_int(s: &str, base: u8, bit_size: u8) -> Result<i64, NumError> {
    if s.is_empty() {
        return Err(NumError::syntax(FN_PARSE_INT, s));
    }

    let (neg, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let un = match parse_uint(unsigned, base, bit_size) {
        Ok(v) => v,
        // Saturated magnitude; the signed check below reports the range
        Err(NumError {
            err: NumErrorCause::OutOfRangeUnsigned { bound_hint },
            ..
        }) => bound_hint,
        Err(err) => return Err(NumError::new(FN_PARSE_INT, s, err.err)),
    };

    let bits = if bit_size == 0 {
        usize::BITS
    } else {
        u32::from(bit_size)
    };
    let cutoff = 1u64 << (bits - 1);

    if !neg && un >= cutoff {
        return Err(NumError::range_signed(FN_PARSE_INT, s, (cutoff - 1) as i64));
    }
    if neg && un > cutoff {
        return Err(NumError::range_signed(
            FN_PARSE_INT,
            s,
            (cutoff as i64).wrapping_neg(),
        ));
    }

    let n = un as i64;
    Ok(if neg { n.wrapping_neg() } else { n })
}

/// Like [`parse_int`] but for unsigned numbers.
///
/// A sign prefix is not permitted.
pub fn parse_uint(s: &str, base: u8, bit_size: u8) -> Result<u64, NumError> {
    if s.is_empty() {
        return Err(NumError::syntax(FN_PARSE_UINT, s));
    }

    let base0 = base == 0;
    let (digits, base) = match base {
        2..=36 => (s.as_bytes(), base),
        0 => split_base_prefix(s.as_bytes()),
        _ => {
            return Err(NumError::new(
                FN_PARSE_UINT,
                s,
                NumErrorCause::InvalidBase(base),
            ))
        }
    };

    let bit_size = match bit_size {
        0 => usize::BITS as u8,
        1..=64 => bit_size,
        _ => {
            return Err(NumError::new(
                FN_PARSE_UINT,
                s,
                NumErrorCause::InvalidBitSize(bit_size),
            ))
        }
    };

    let max_val = if bit_size == 64 {
        u64::MAX
    } else {
        (1u64 << bit_size) - 1
    };

    let mut underscores = false;
    let mut n = 0u64;
    for &c in digits {
        let d = match c {
            b'_' if base0 => {
                underscores = true;
                continue;
            }
            b'0'..=b'9' => c - b'0',
            b'a'..=b'z' => c - b'a' + 10,
            b'A'..=b'Z' => c - b'A' + 10,
            _ => return Err(NumError::syntax(FN_PARSE_UINT, s)),
        };

        if d >= base {
            return Err(NumError::syntax(FN_PARSE_UINT, s));
        }

        n = n
            .checked_mul(u64::from(base))
            .and_then(|n| n.checked_add(u64::from(d)))
            .filter(|&n| n <= max_val)
            .ok_or_else(|| NumError::range_unsigned(FN_PARSE_UINT, s, max_val))?;
    }

    if underscores && !underscore_ok(s) {
        return Err(NumError::syntax(FN_PARSE_UINT, s));
    }

    Ok(n)
}

/// Strip a base prefix for base 0 parsing
fn split_base_prefix(s: &[u8]) -> (&[u8], u8) {
    match s {
        [b'0', p, rest @ ..] if !rest.is_empty() && matches!(*p, b'b' | b'B') => (rest, 2),
        [b'0', p, rest @ ..] if !rest.is_empty() && matches!(*p, b'o' | b'O') => (rest, 8),
        [b'0', p, rest @ ..] if !rest.is_empty() && matches!(*p, b'x' | b'X') => (rest, 16),
        [b'0', rest @ ..] => (rest, 8),
        _ => (s, 10),
    }
}

/// Reports whether the underscores in s are allowed.
///
/// Underscores must separate digits (or a base prefix and a digit);
/// they may not lead, trail or repeat.
fn underscore_ok(s: &str) -> bool {
    // Previous character class: '^' start, '0' digit or prefix, '_' underscore, '!' other
    let mut saw = b'^';
    let mut s = s.as_bytes();

    if let [b'+' | b'-', rest @ ..] = s {
        s = rest;
    }

    let mut hex = false;
    if let [b'0', p, rest @ ..] = s {
        let p = p.to_ascii_lowercase();
        if matches!(p, b'b' | b'o' | b'x') {
            saw = b'0';
            hex = p == b'x';
            s = rest;
        }
    }

    for &c in s {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            saw = b'0';
            continue;
        }

        if c == b'_' {
            if saw != b'0' {
                return false;
            }
            saw = b'_';
            continue;
        }

        if saw == b'_' {
            return false;
        }

        saw = b'!';
    }

    saw != b'_'
}
