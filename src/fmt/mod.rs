/*!
Configurable support for printing and parsing clock times.

The grammar is small and fixed:

```text
signed-time = [ "-" ] time
time        = hour ":" minute [ ":" second ]
hour        = DIGIT DIGIT
minute      = DIGIT DIGIT
second      = DIGIT DIGIT
```

Parsing is exposed through the `FromStr` implementations on
[`Time`](crate::Time) and [`SignedTime`](crate::SignedTime). Printing with
non-default options (dropping or rounding away the seconds) goes through
[`TimePrinter`]:

```
use hms::{fmt::TimePrinter, Time};

static PRINTER: TimePrinter = TimePrinter::new().seconds(false).round(true);

let time = Time::from_hms(17, 30, 41);
let mut buf = String::new();
PRINTER.print_time(&time, &mut buf)?;
assert_eq!(buf, "17:31");
# Ok::<(), hms::Error>(())
```
*/

use crate::error::{err, Error};

pub use self::printer::TimePrinter;
pub(crate) use self::parser::TimeParser;

mod parser;
mod printer;
pub(crate) mod util;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the remainder of the input
/// that was not consumed. This makes it possible to parse, for example, a
/// prefix of the input and pass the rest on.
#[derive(Debug)]
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    pub(crate) value: V,
    /// The remainder of the input that was not parsed.
    pub(crate) input: &'i [u8],
}

impl<'i, V: core::fmt::Display> Parsed<'i, V> {
    /// Ensures that the parsed value represents the entire input.
    pub(crate) fn into_full(self) -> Result<V, Error> {
        if self.input.is_empty() {
            return Ok(self.value);
        }
        Err(err!(
            "parsed value '{value}', but unparsed input {unparsed} \
             remains (expected no unparsed input)",
            value = self.value,
            unparsed = crate::util::escape::Bytes(self.input),
        ))
    }
}

/// A trait for objects that can receive formatted output.
///
/// This is like `core::fmt::Write`, but uses this crate's error type, so
/// that printing routines compose with everything else returning a
/// [`Result<T, Error>`](Error).
///
/// Implementations are provided for `String` and, via [`StdFmtWrite`],
/// anything implementing `core::fmt::Write`.
pub trait Write {
    /// Writes the given string to this writer, returning whether it
    /// succeeded or not.
    fn write_str(&mut self, string: &str) -> Result<(), Error>;

    /// Writes the given character to this writer, returning whether it
    /// succeeded or not.
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string);
        Ok(())
    }
}

impl<W: Write + ?Sized> Write for &mut W {
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        (**self).write_str(string)
    }

    fn write_char(&mut self, char: char) -> Result<(), Error> {
        (**self).write_char(char)
    }
}

/// An adapter for using implementations of `core::fmt::Write` with this
/// crate's [`Write`] trait.
#[derive(Clone, Debug)]
pub struct StdFmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for StdFmtWrite<W> {
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0
            .write_str(string)
            .map_err(|_| err!("an error occurred when formatting an argument"))
    }
}

/// An extension trait for writing decimal formatted integers.
pub(crate) trait WriteExt: Write {
    /// Write the given number as a decimal using ASCII digits to this
    /// buffer, with the padding given by the formatter.
    fn write_int(
        &mut self,
        formatter: &util::DecimalFormatter,
        n: impl Into<i64>,
    ) -> Result<(), Error> {
        self.write_str(util::Decimal::new(formatter, n.into()).as_str())
    }
}

impl<W: Write> WriteExt for W {}
