use crate::{
    error::{err, Error, ErrorContext},
    fmt::Parsed,
    signed::SignedTime,
    time::Time,
    util::{escape, parse},
};

/// A parser for the clock time format `[-]HH:MM[:SS]`.
///
/// Each component must be exactly two ASCII digits, but its value is
/// otherwise unconstrained: out-of-range components run through the same
/// normalization as the constructors, so `"24:00"` parses successfully and
/// lands on midnight. Only the shape of the string can fail.
///
/// Every error returned here wraps the full offending input, so callers
/// never need to add that context themselves.
#[derive(Debug)]
pub(crate) struct TimeParser {
    _priv: (),
}

impl TimeParser {
    /// Create a new clock time parser with the default configuration.
    pub(crate) const fn new() -> TimeParser {
        TimeParser { _priv: () }
    }

    /// Parse an unsigned clock time from the given bytes, requiring the
    /// entire input to be consumed.
    ///
    /// A leading `-` is not part of the unsigned grammar, so it fails here
    /// like any other non-digit byte would.
    pub(crate) fn parse_time(&self, input: &[u8]) -> Result<Time, Error> {
        trace!("parsing clock time from {input:?}", input = escape::Bytes(input));
        let parsed =
            self.parse_time_spec(input).with_context(|| Error::format(input))?;
        parsed.into_full().with_context(|| Error::format(input))
    }

    /// Parse a signed clock time from the given bytes, requiring the
    /// entire input to be consumed.
    pub(crate) fn parse_signed_time(
        &self,
        input: &[u8],
    ) -> Result<SignedTime, Error> {
        trace!(
            "parsing signed clock time from {input:?}",
            input = escape::Bytes(input),
        );
        let (sign, magnitude) = match input.first() {
            Some(&b'-') => (-1, &input[1..]),
            _ => (1, input),
        };
        let parsed = self
            .parse_time_spec(magnitude)
            .with_context(|| Error::format(input))?;
        let time = parsed.into_full().with_context(|| Error::format(input))?;
        Ok(SignedTime::from_parts(sign, time))
    }

    fn parse_time_spec<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Time>, Error> {
        let Parsed { value: hour, input } = self.parse_hour(input)?;
        let Parsed { input, .. } = self.parse_separator(input, "hour")?;
        let Parsed { value: minute, input } = self.parse_minute(input)?;
        let (second, input) = if input.first() == Some(&b':') {
            let Parsed { value: second, input } =
                self.parse_second(&input[1..])?;
            (second, input)
        } else {
            (0, input)
        };
        Ok(Parsed { value: Time::from_hms(hour, minute, second), input })
    }

    fn parse_hour<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i64>, Error> {
        let (hour, input) = parse::split(input, 2).ok_or_else(|| {
            err!("expected two digit hour, but found end of input")
        })?;
        let hour = parse::i64(hour).map_err(|err| {
            err.context(err!(
                "failed to parse {hour:?} as hour (a two digit integer)",
                hour = escape::Bytes(hour),
            ))
        })?;
        Ok(Parsed { value: hour, input })
    }

    fn parse_minute<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i64>, Error> {
        let (minute, input) = parse::split(input, 2).ok_or_else(|| {
            err!("expected two digit minute, but found end of input")
        })?;
        let minute = parse::i64(minute).map_err(|err| {
            err.context(err!(
                "failed to parse {minute:?} as minute (a two digit integer)",
                minute = escape::Bytes(minute),
            ))
        })?;
        Ok(Parsed { value: minute, input })
    }

    fn parse_second<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i64>, Error> {
        let (second, input) = parse::split(input, 2).ok_or_else(|| {
            err!("expected two digit second after ':', but found end of input")
        })?;
        let second = parse::i64(second).map_err(|err| {
            err.context(err!(
                "failed to parse {second:?} as second (a two digit integer)",
                second = escape::Bytes(second),
            ))
        })?;
        Ok(Parsed { value: second, input })
    }

    fn parse_separator<'i>(
        &self,
        input: &'i [u8],
        after: &'static str,
    ) -> Result<Parsed<'i, ()>, Error> {
        let Some(&byte) = input.first() else {
            return Err(err!(
                "expected ':' separator after {after}, \
                 but found end of input",
            ));
        };
        if byte != b':' {
            return Err(err!(
                "expected ':' separator after {after}, but found {byte} \
                 instead",
                byte = escape::Byte(byte),
            ));
        }
        Ok(Parsed { value: (), input: &input[1..] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_time(input: &str) -> Result<Time, Error> {
        TimeParser::new().parse_time(input.as_bytes())
    }

    fn parse_signed(input: &str) -> Result<SignedTime, Error> {
        TimeParser::new().parse_signed_time(input.as_bytes())
    }

    #[test]
    fn ok_basic() {
        assert_eq!(parse_time("00:00:00").unwrap(), Time::midnight());
        assert_eq!(parse_time("12:00:59").unwrap(), Time::from_hms(12, 0, 59));
        // Seconds are optional and default to zero.
        assert_eq!(parse_time("23:59").unwrap(), Time::from_hms(23, 59, 0));
    }

    #[test]
    fn ok_out_of_range_components_wrap() {
        assert_eq!(parse_time("24:00").unwrap(), Time::midnight());
        assert_eq!(parse_time("12:99").unwrap(), Time::from_hms(13, 39, 0));
        assert_eq!(parse_time("99:99:99").unwrap(), Time::from_hms(4, 40, 39));
    }

    #[test]
    fn ok_signed() {
        let t = parse_signed("-12:00:59").unwrap();
        assert_eq!(t.total_seconds(), -(12 * 3600 + 59));
        let t = parse_signed("-01:30").unwrap();
        assert_eq!(t.total_seconds(), -5400);
        let t = parse_signed("01:30").unwrap();
        assert_eq!(t.total_seconds(), 5400);
        // "-00:00" is fine, just indistinguishable from zero.
        let t = parse_signed("-00:00").unwrap();
        assert_eq!(t.total_seconds(), 0);
    }

    #[test]
    fn err_shape() {
        assert!(parse_time("").is_err());
        assert!(parse_time("12").is_err());
        assert!(parse_time("12:").is_err());
        assert!(parse_time("12-00:11").is_err());
        assert!(parse_time("1:00").is_err());
        assert!(parse_time("12:00:00:00").is_err());
        assert!(parse_time("12:00:").is_err());
        assert!(parse_time(" 12:00").is_err());
        assert!(parse_time("12:00 ").is_err());
        // The sign belongs to the signed grammar only.
        assert!(parse_time("-12:00").is_err());
        assert!(parse_signed("--12:00").is_err());
        assert!(parse_signed("+12:00").is_err());
    }

    #[test]
    fn err_is_format_with_input() {
        let err = parse_time("12-00:11").unwrap_err();
        assert!(err.is_format());
        let msg = err.to_string();
        assert!(msg.contains("12-00:11"), "unexpected message: {msg}");

        let err = parse_signed("-12-00").unwrap_err();
        assert!(err.is_format());
        let msg = err.to_string();
        assert!(msg.contains("-12-00"), "unexpected message: {msg}");
    }
}
