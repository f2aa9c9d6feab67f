/*!
Provides helpers for escaping raw bytes in error messages.

The parser operates on `&[u8]`, so the input quoted by an error message is
not guaranteed to be valid UTF-8. These adapters render any byte sequence
as readable ASCII, with everything else hex escaped.
*/

/// A `Display` and `Debug` adapter for a single byte.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let byte = self.0;
        if byte == b'"' || byte == b'\\' {
            write!(f, "\\{}", char::from(byte))
        } else if byte.is_ascii_graphic() || byte == b' ' {
            write!(f, "{}", char::from(byte))
        } else {
            write!(f, "\\x{byte:02X}")
        }
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// A `Display` and `Debug` adapter for a slice of bytes.
#[derive(Clone, Copy)]
pub(crate) struct Bytes<'a>(pub(crate) &'a [u8]);

impl core::fmt::Display for Bytes<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for &byte in self.0 {
            core::fmt::Display::fmt(&Byte(byte), f)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Bytes<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_passes_through() {
        assert_eq!(Bytes(b"12:34:56").to_string(), "12:34:56");
        assert_eq!(format!("{:?}", Bytes(b"ab cd")), "\"ab cd\"");
    }

    #[test]
    fn unprintable_is_escaped() {
        assert_eq!(Bytes(b"12\x00:34").to_string(), "12\\x00:34");
        assert_eq!(Byte(b'\n').to_string(), "\\x0A");
        assert_eq!(Byte(b'"').to_string(), "\\\"");
    }
}
