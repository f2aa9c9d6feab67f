/*!
Helpers for parsing fixed width ASCII decimal fields.
*/

use crate::{
    error::{err, Error},
    util::escape,
};

/// Splits the given input into two slices at the given position.
///
/// Returns `None` when `at > input.len()`, which callers treat as "the
/// input ended before the field we wanted."
#[inline]
pub(crate) fn split(input: &[u8], at: usize) -> Option<(&[u8], &[u8])> {
    if at > input.len() {
        None
    } else {
        Some(input.split_at(at))
    }
}

/// Parses an `i64` from a run of ASCII digits.
///
/// This is deliberately stricter than `str::parse`: no sign, no leading or
/// trailing whitespace and at least one digit. Every byte must be in
/// `0-9`.
#[inline]
pub(crate) fn i64(bytes: &[u8]) -> Result<i64, Error> {
    if bytes.is_empty() {
        return Err(err!("invalid number, no digits found"));
    }
    let mut n: i64 = 0;
    for &byte in bytes.iter() {
        let digit = match byte.checked_sub(b'0') {
            None => {
                return Err(err!(
                    "invalid digit, expected 0-9 but got {byte}",
                    byte = escape::Byte(byte),
                ));
            }
            Some(digit) if digit > 9 => {
                return Err(err!(
                    "invalid digit, expected 0-9 but got {byte}",
                    byte = escape::Byte(byte),
                ));
            }
            Some(digit) => digit,
        };
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(i64::from(digit)))
            .ok_or_else(|| {
                err!(
                    "number {bytes} too big to parse into 64-bit integer",
                    bytes = escape::Bytes(bytes),
                )
            })?;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_short_input() {
        assert_eq!(split(b"12:34", 2), Some((&b"12"[..], &b":34"[..])));
        assert_eq!(split(b"1", 2), None);
        assert_eq!(split(b"", 0), Some((&b""[..], &b""[..])));
    }

    #[test]
    fn parse_digits() {
        assert_eq!(i64(b"00").unwrap(), 0);
        assert_eq!(i64(b"59").unwrap(), 59);
        assert!(i64(b"").is_err());
        assert!(i64(b"-1").is_err());
        assert!(i64(b"1 ").is_err());
        assert!(i64(b"99999999999999999999").is_err());
    }
}
