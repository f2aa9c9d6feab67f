/*!
Utilities for formatting integers without allocating.
*/

/// A simple formatter for converting `i64` values to ASCII byte strings.
///
/// The only configuration is zero padding out to a minimum number of
/// digits, which is all the clock time format needs.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalFormatter {
    minimum_digits: u8,
}

impl DecimalFormatter {
    /// Creates a new formatter with no padding.
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { minimum_digits: 0 }
    }

    /// The minimum number of digits that the number should be padded out
    /// to, with zeroes. The maximum supported value is 19, which is also
    /// the maximum number of decimal digits in any `i64` value.
    pub(crate) const fn padding(self, digits: u8) -> DecimalFormatter {
        let minimum_digits =
            if digits > Decimal::MAX_I64_DIGITS { Decimal::MAX_I64_DIGITS } else { digits };
        DecimalFormatter { minimum_digits }
    }
}

/// A decimal formatted `i64`, with the ASCII rendition stored inline.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_LEN as usize],
    start: u8,
    end: u8,
}

impl Decimal {
    /// Discovered via `i64::MIN.to_string().len()`.
    const MAX_LEN: u8 = 20;
    /// Discovered via `i64::MAX.to_string().len()`.
    const MAX_I64_DIGITS: u8 = 19;

    /// Converts the given value to a decimal using the given formatter.
    pub(crate) const fn new(
        formatter: &DecimalFormatter,
        value: i64,
    ) -> Decimal {
        // Writing the digits backward from the end of the buffer sidesteps
        // needing to know the length up front. `i64::MIN` has no positive
        // counterpart, so it gets handled by hand.
        if value == i64::MIN {
            return Decimal {
                buf: *b"-9223372036854775808",
                start: 0,
                end: Decimal::MAX_LEN,
            };
        }
        let mut decimal = Decimal {
            buf: [0; Decimal::MAX_LEN as usize],
            start: Decimal::MAX_LEN,
            end: Decimal::MAX_LEN,
        };
        let sign = value.signum();
        let mut value = value.abs();
        loop {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0' + ((value % 10) as u8);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        while decimal.len() < formatter.minimum_digits {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0';
        }
        if sign < 0 {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'-';
        }
        decimal
    }

    const fn len(&self) -> u8 {
        self.end - self.start
    }

    /// Returns the ASCII representation of this decimal as a string slice.
    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: This is safe because all bytes written to `self.buf` are
        // guaranteed to be ASCII (including in its initial state), and
        // thus, any subsequence is guaranteed to be valid UTF-8.
        unsafe {
            core::str::from_utf8_unchecked(
                &self.buf[usize::from(self.start)..usize::from(self.end)],
            )
        }
    }
}
