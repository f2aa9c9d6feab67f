use crate::{
    error::Error,
    fmt::{util::DecimalFormatter, Write, WriteExt},
    signed::SignedTime,
    time::Time,
};

/// A printer for the clock time format `[-]HH:MM[:SS]`.
///
/// The default configuration prints all three components, zero padded, and
/// corresponds to the `Display` implementations on [`Time`] and
/// [`SignedTime`]. Two knobs control how the seconds component is treated:
///
/// * [`TimePrinter::seconds`] drops the `:SS` component entirely.
/// * [`TimePrinter::round`], which only matters when seconds are dropped,
///   rounds to the nearest minute instead of truncating. Rounding carries
///   into the hour, and `23:59:30` and up wrap all the way around to
///   `00:00`.
///
/// A rounded or truncated signed value whose printed magnitude is `00:00`
/// never gets a sign, so this printer never produces `-00:00`.
///
/// # Example
///
/// ```
/// use hms::{fmt::TimePrinter, Time};
///
/// static PRINTER: TimePrinter = TimePrinter::new().seconds(false);
///
/// let mut buf = String::new();
/// PRINTER.print_time(&Time::from_hms(17, 30, 41), &mut buf)?;
/// assert_eq!(buf, "17:30");
/// # Ok::<(), hms::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct TimePrinter {
    seconds: bool,
    round: bool,
}

impl TimePrinter {
    /// Create a new clock time printer with the default configuration:
    /// seconds are printed and rounding is disabled.
    pub const fn new() -> TimePrinter {
        TimePrinter { seconds: true, round: false }
    }

    /// Whether to include the seconds component.
    ///
    /// Enabled by default. When disabled, the seconds are truncated unless
    /// [`TimePrinter::round`] is also set.
    pub const fn seconds(self, yes: bool) -> TimePrinter {
        TimePrinter { seconds: yes, ..self }
    }

    /// Whether to round to the nearest minute when the seconds component
    /// is dropped.
    ///
    /// Disabled by default. This has no effect while seconds are printed.
    pub const fn round(self, yes: bool) -> TimePrinter {
        TimePrinter { round: yes, ..self }
    }

    /// Print an unsigned clock time to the given writer.
    pub fn print_time<W: Write>(
        &self,
        time: &Time,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        if self.seconds {
            wtr.write_int(&FMT_TWO, time.hour())?;
            wtr.write_str(":")?;
            wtr.write_int(&FMT_TWO, time.minute())?;
            wtr.write_str(":")?;
            wtr.write_int(&FMT_TWO, time.second())?;
        } else {
            let (hour, minute) = self.hour_minute(time);
            wtr.write_int(&FMT_TWO, hour)?;
            wtr.write_str(":")?;
            wtr.write_int(&FMT_TWO, minute)?;
        }
        Ok(())
    }

    /// Print a signed clock time to the given writer.
    pub fn print_signed_time<W: Write>(
        &self,
        time: &SignedTime,
        mut wtr: W,
    ) -> Result<(), Error> {
        let magnitude = time.abs();
        let negative = if self.seconds {
            time.total_seconds() < 0
        } else {
            // A magnitude that truncates or rounds to zero must not carry
            // a sign.
            time.signum() < 0 && self.hour_minute(&magnitude) != (0, 0)
        };
        if negative {
            wtr.write_str("-")?;
        }
        self.print_time(&magnitude, wtr)
    }

    /// Applies the seconds-dropping rule: truncate, or round to the
    /// nearest minute with carry into the hour and wraparound past
    /// `23:59`.
    fn hour_minute(&self, time: &Time) -> (i8, i8) {
        let (mut hour, mut minute) = (time.hour(), time.minute());
        if self.round && time.second() >= 30 {
            if minute < 59 {
                minute += 1;
            } else if hour < 23 {
                hour += 1;
                minute = 0;
            } else {
                hour = 0;
                minute = 0;
            }
        }
        (hour, minute)
    }
}

impl Default for TimePrinter {
    fn default() -> TimePrinter {
        TimePrinter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print(printer: &TimePrinter, time: Time) -> String {
        let mut buf = String::new();
        printer.print_time(&time, &mut buf).unwrap();
        buf
    }

    fn print_signed(printer: &TimePrinter, time: SignedTime) -> String {
        let mut buf = String::new();
        printer.print_signed_time(&time, &mut buf).unwrap();
        buf
    }

    #[test]
    fn full() {
        let p = TimePrinter::new();
        assert_eq!(print(&p, Time::midnight()), "00:00:00");
        assert_eq!(print(&p, Time::from_hms(7, 8, 9)), "07:08:09");
        assert_eq!(print(&p, Time::from_hms(23, 59, 59)), "23:59:59");
    }

    #[test]
    fn truncated() {
        let p = TimePrinter::new().seconds(false);
        assert_eq!(print(&p, Time::from_hms(12, 0, 29)), "12:00");
        assert_eq!(print(&p, Time::from_hms(12, 0, 59)), "12:00");
        assert_eq!(print(&p, Time::from_hms(23, 59, 59)), "23:59");
    }

    #[test]
    fn rounded() {
        let p = TimePrinter::new().seconds(false).round(true);
        assert_eq!(print(&p, Time::from_hms(12, 0, 29)), "12:00");
        assert_eq!(print(&p, Time::from_hms(12, 0, 30)), "12:01");
        // Carry into the hour.
        assert_eq!(print(&p, Time::from_hms(12, 59, 30)), "13:00");
        // And all the way around the dial.
        assert_eq!(print(&p, Time::from_hms(23, 59, 30)), "00:00");
        assert_eq!(print(&p, Time::from_hms(23, 59, 29)), "23:59");
    }

    // Port of an exhaustive check over every second of the day: rounding
    // must always agree with the closed form on total seconds.
    #[test]
    fn rounded_exhaustive() {
        let p = TimePrinter::new().seconds(false).round(true);
        for hour in 0..24 {
            for minute in 0..60 {
                for second in 0..60 {
                    let time = Time::from_hms(hour, minute, second);
                    let rounded_minutes = if second < 30 {
                        i64::from(time.total_seconds()) / 60
                    } else {
                        (i64::from(time.total_seconds()) / 60 + 1) % (24 * 60)
                    };
                    let expected = format!(
                        "{:02}:{:02}",
                        rounded_minutes / 60,
                        rounded_minutes % 60
                    );
                    assert_eq!(print(&p, time), expected, "for {time:?}");
                }
            }
        }
    }

    #[test]
    fn signed_zero_is_unsigned() {
        let p = TimePrinter::new();
        assert_eq!(print_signed(&p, SignedTime::from_seconds(0)), "00:00:00");
        assert_eq!(print_signed(&p, SignedTime::from_seconds(-59)), "-00:00:59");

        let p = TimePrinter::new().seconds(false);
        // -00:00:29 truncates to zero, so no sign.
        assert_eq!(print_signed(&p, SignedTime::from_seconds(-29)), "00:00");
        assert_eq!(print_signed(&p, SignedTime::from_seconds(-60)), "-00:01");

        let p = TimePrinter::new().seconds(false).round(true);
        assert_eq!(print_signed(&p, SignedTime::from_seconds(-45)), "-00:01");
        // -23:59:30 rounds around the dial to zero, so no sign.
        assert_eq!(print_signed(&p, SignedTime::from_seconds(-86_370)), "00:00");
    }
}
