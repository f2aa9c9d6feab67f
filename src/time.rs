use core::{
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::{
    error::{err, Error},
    fmt::{StdFmtWrite, TimeParser, TimePrinter},
};

/// The number of seconds displayed by one trip around the clock dial.
pub(crate) const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A wall clock time on a 24 hour dial.
///
/// A `Time` always holds a valid combination of fields: hours in
/// `0..=23`, minutes and seconds in `0..=59`. It never errors on
/// construction. Instead, every constructor and setter normalizes,
/// with overflow in one field carrying into the next and the hour
/// wrapping around the dial:
///
/// ```
/// use hms::Time;
///
/// // 70 seconds is 1 minute and 10 seconds.
/// assert_eq!(Time::from_hms(9, 0, 70), Time::from_hms(9, 1, 10));
/// // Negative values wrap backward.
/// assert_eq!(Time::from_hms(0, 0, -1), Time::from_hms(23, 59, 59));
/// ```
///
/// The normalized fields are applied in order, seconds first, then
/// minutes (including any carry from the seconds), then hours. The hour
/// wraps modulo 24 with no further effect, so a `Time` carries no notion
/// of "which day".
///
/// # Parsing and printing
///
/// A `Time` parses from and prints to `HH:MM:SS`, with the seconds
/// optional on input:
///
/// ```
/// use hms::Time;
///
/// let t: Time = "12:30".parse()?;
/// assert_eq!(t.to_string(), "12:30:00");
/// # Ok::<(), hms::Error>(())
/// ```
///
/// See [`fmt::TimePrinter`](crate::fmt::TimePrinter) for printing with
/// the seconds dropped or rounded away.
///
/// # Comparisons
///
/// `Time` implements a total order by position on the dial, so `Ord`,
/// `Eq` and `Hash` all behave as expected. The [`Time::compare`] and
/// [`Time::equals`] methods additionally accept the string form directly.
///
/// # Arithmetic
///
/// Addition wraps around the dial. Subtraction via the `-` operator
/// produces the *absolute* difference, since a `Time` has no sign; use
/// [`SignedTime`](crate::SignedTime) when the direction of the
/// difference matters.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time {
    hour: i8,
    minute: i8,
    second: i8,
}

impl Time {
    /// The minimum value, `00:00:00`.
    pub const MIN: Time = Time::midnight();

    /// The maximum value, `23:59:59`.
    pub const MAX: Time = Time { hour: 23, minute: 59, second: 59 };

    /// Returns the first moment of the day, `00:00:00`.
    ///
    /// This is also what the `Default` implementation returns.
    pub const fn midnight() -> Time {
        Time { hour: 0, minute: 0, second: 0 }
    }

    /// Creates a new `Time` from each of its components.
    ///
    /// Out-of-range components are normalized, never rejected. The
    /// seconds are applied first, then the minutes (plus any carry from
    /// the seconds), then the hours:
    ///
    /// ```
    /// use hms::Time;
    ///
    /// assert_eq!(Time::from_hms(12, 70, -30), Time::from_hms(13, 9, 30));
    /// assert_eq!(Time::from_hms(24, 0, 0), Time::midnight());
    /// ```
    pub fn from_hms(hour: i64, minute: i64, second: i64) -> Time {
        let mut time = Time::midnight();
        time.set_second(second);
        time.set_minute(i64::from(time.minute).saturating_add(minute));
        time.set_hour(i64::from(time.hour).saturating_add(hour));
        time
    }

    /// Creates a new `Time` from a count of seconds since midnight.
    ///
    /// The count wraps around the dial in either direction:
    ///
    /// ```
    /// use hms::Time;
    ///
    /// assert_eq!(Time::from_seconds(3_661), Time::from_hms(1, 1, 1));
    /// assert_eq!(Time::from_seconds(86_400), Time::midnight());
    /// assert_eq!(Time::from_seconds(-1), Time::from_hms(23, 59, 59));
    /// ```
    pub fn from_seconds(seconds: i64) -> Time {
        let mut time = Time::midnight();
        time.set_second(seconds);
        time
    }

    /// Returns the current wall clock time in the system's local time
    /// zone, with sub-second precision discarded.
    pub fn now() -> Time {
        Time::from(chrono::Local::now().time())
    }

    /// Returns the "hour" component of this time, in `0..=23`.
    pub fn hour(&self) -> i8 {
        self.hour
    }

    /// Returns the "minute" component of this time, in `0..=59`.
    pub fn minute(&self) -> i8 {
        self.minute
    }

    /// Returns the "second" component of this time, in `0..=59`.
    pub fn second(&self) -> i8 {
        self.second
    }

    /// Returns this time's position on the dial as a count of seconds
    /// since midnight, in `0..86_400`.
    pub fn total_seconds(&self) -> i32 {
        i32::from(self.hour) * 3600
            + i32::from(self.minute) * 60
            + i32::from(self.second)
    }

    /// Sets the seconds component to the given value.
    ///
    /// The value may be any count of seconds. It is wrapped into
    /// `0..=59`, with the excess (positive or negative) carried into the
    /// minutes:
    ///
    /// ```
    /// use hms::Time;
    ///
    /// let mut t = Time::from_hms(12, 10, 11);
    /// t.set_second(i64::from(t.second()) + 123);
    /// assert_eq!(t, Time::from_hms(12, 12, 14));
    /// ```
    pub fn set_second(&mut self, second: i64) {
        self.second = second.rem_euclid(60) as i8;
        self.set_minute(i64::from(self.minute) + second.div_euclid(60));
    }

    /// Sets the minutes component to the given value.
    ///
    /// The value is wrapped into `0..=59` with the excess carried into
    /// the hours, exactly like [`Time::set_second`].
    pub fn set_minute(&mut self, minute: i64) {
        self.minute = minute.rem_euclid(60) as i8;
        self.set_hour(i64::from(self.hour) + minute.div_euclid(60));
    }

    /// Sets the hours component to the given value, wrapped into
    /// `0..=23`.
    ///
    /// The wrap is silent. There is no field for a day to carry into.
    pub fn set_hour(&mut self, hour: i64) {
        self.hour = hour.rem_euclid(24) as i8;
    }

    /// Adds two clock times, wrapping around the dial on overflow.
    ///
    /// This is used by the `+` operator.
    ///
    /// ```
    /// use hms::Time;
    ///
    /// let t = Time::from_hms(23, 0, 0) + Time::from_hms(2, 30, 0);
    /// assert_eq!(t, Time::from_hms(1, 30, 0));
    /// ```
    pub fn wrapping_add(self, other: Time) -> Time {
        Time::from_seconds(
            i64::from(self.total_seconds()) + i64::from(other.total_seconds()),
        )
    }

    /// Returns the absolute difference between two clock times.
    ///
    /// This is used by the `-` operator. The result is the same whichever
    /// operand is bigger; when the direction matters, convert both sides
    /// to [`SignedTime`](crate::SignedTime) first.
    ///
    /// ```
    /// use hms::Time;
    ///
    /// let lo = Time::from_hms(12, 0, 0);
    /// let hi = Time::from_hms(12, 0, 59);
    /// assert_eq!(lo - hi, hi - lo);
    /// assert_eq!(lo - hi, Time::from_hms(0, 0, 59));
    /// ```
    pub fn abs_diff(self, other: Time) -> Time {
        Time::from_seconds(i64::from(
            (self.total_seconds() - other.total_seconds()).abs(),
        ))
    }

    /// Compares this time with another, where the other may be anything
    /// that converts into a `Time`, including its string form.
    ///
    /// Returns a negative number when `self` is earlier, zero when equal
    /// and a positive number when `self` is later. The only error comes
    /// from parsing a string operand.
    ///
    /// ```
    /// use hms::Time;
    ///
    /// let t = Time::from_hms(12, 0, 0);
    /// assert!(t.compare("12:00:59")? < 0);
    /// assert!(t.compare("12:00")? == 0);
    /// # Ok::<(), hms::Error>(())
    /// ```
    pub fn compare(self, other: impl IntoTime) -> Result<i32, Error> {
        let other = other.into_time()?;
        Ok(self.total_seconds() - other.total_seconds())
    }

    /// Returns true when this time and the given one occupy the same
    /// position on the dial.
    ///
    /// Like [`Time::compare`], the operand may be a string.
    pub fn equals(self, other: impl IntoTime) -> Result<bool, Error> {
        Ok(self.compare(other)? == 0)
    }

    /// Attaches this clock time to the given calendar date.
    pub fn to_datetime(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive())
    }

    /// Attaches this clock time to the calendar date given by its
    /// components.
    ///
    /// Unlike the clock fields, calendar components are never normalized.
    /// A date that does not exist, like February 30, is an error.
    pub fn to_datetime_with(
        self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<NaiveDateTime, Error> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(
            || {
                err!(
                    "{year:04}-{month:02}-{day:02} is not a valid \
                     calendar date",
                )
            },
        )?;
        Ok(self.to_datetime(date))
    }

    /// Attaches this clock time to today's date in the system's local
    /// time zone.
    pub fn to_datetime_today(self) -> NaiveDateTime {
        self.to_datetime(chrono::Local::now().date_naive())
    }

    /// Converts this time to its `chrono` equivalent, for interoperating
    /// with APIs (like locale aware formatting) that speak
    /// [`NaiveTime`].
    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(
            self.hour as u32,
            self.minute as u32,
            self.second as u32,
        )
        .expect("normalized fields are always a valid chrono time")
    }
}

/// The default value, `00:00:00`.
impl Default for Time {
    fn default() -> Time {
        Time::midnight()
    }
}

impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        static PRINTER: TimePrinter = TimePrinter::new();
        PRINTER
            .print_time(self, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::fmt::Debug for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour, self.minute, self.second,
        )
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(string: &str) -> Result<Time, Error> {
        TimeParser::new().parse_time(string.as_bytes())
    }
}

impl<'a> TryFrom<&'a str> for Time {
    type Error = Error;

    fn try_from(string: &'a str) -> Result<Time, Error> {
        string.parse()
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Time {
        Time::from_hms(
            i64::from(time.hour()),
            i64::from(time.minute()),
            i64::from(time.second()),
        )
    }
}

impl From<NaiveDateTime> for Time {
    fn from(datetime: NaiveDateTime) -> Time {
        Time::from(datetime.time())
    }
}

/// Adds two clock times, wrapping around the dial.
impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        self.wrapping_add(rhs)
    }
}

/// Adds two clock times, wrapping around the dial.
impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Time) {
        *self = *self + rhs;
    }
}

/// Subtracts two clock times, yielding the absolute difference.
impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        self.abs_diff(rhs)
    }
}

/// Subtracts two clock times, yielding the absolute difference.
impl SubAssign for Time {
    fn sub_assign(&mut self, rhs: Time) {
        *self = *self - rhs;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Time {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Time {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Time, D::Error> {
        use serde::de;

        struct TimeVisitor;

        impl<'de> de::Visitor<'de> for TimeVisitor {
            type Value = Time;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a clock time string")
            }

            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Time, E> {
                TimeParser::new()
                    .parse_time(value)
                    .map_err(de::Error::custom)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Time, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

/// A conversion trait for APIs that accept a clock time or its string
/// form interchangeably, like [`Time::compare`].
///
/// Implementations exist for [`Time`] itself (and references to it) and
/// for `&str`, where the string is parsed and the conversion is the only
/// thing that can fail.
pub trait IntoTime {
    /// Converts this value into a [`Time`].
    fn into_time(self) -> Result<Time, Error>;
}

impl IntoTime for Time {
    fn into_time(self) -> Result<Time, Error> {
        Ok(self)
    }
}

impl IntoTime for &Time {
    fn into_time(self) -> Result<Time, Error> {
        Ok(*self)
    }
}

impl IntoTime for &str {
    fn into_time(self) -> Result<Time, Error> {
        self.parse()
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
    fn arbitrary(g: &mut quickcheck::Gen) -> Time {
        Time::from_seconds(i64::arbitrary(g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: i64, minute: i64, second: i64) -> Time {
        Time::from_hms(hour, minute, second)
    }

    fn in_range(t: Time) -> bool {
        (0..24).contains(&t.hour())
            && (0..60).contains(&t.minute())
            && (0..60).contains(&t.second())
    }

    #[test]
    fn accessors() {
        let t = time(12, 10, 11);
        assert_eq!((t.hour(), t.minute(), t.second()), (12, 10, 11));
        assert_eq!(t.total_seconds(), 12 * 3600 + 10 * 60 + 11);
    }

    #[test]
    fn set_second_carries_forward() {
        let mut t = time(12, 10, 11);
        t.set_second(i64::from(t.second()) + 123);
        assert_eq!(t, time(12, 12, 14));
    }

    #[test]
    fn set_minute_carries_forward() {
        let mut t = time(12, 12, 14);
        t.set_minute(i64::from(t.minute()) + 110);
        assert_eq!(t, time(14, 2, 14));
    }

    #[test]
    fn set_hour_wraps() {
        let mut t = time(14, 2, 14);
        t.set_hour(i64::from(t.hour()) + 36);
        assert_eq!(t, time(2, 2, 14));
    }

    #[test]
    fn set_second_carries_backward() {
        let mut t = time(12, 10, 11);
        t.set_second(i64::from(t.second()) - 123);
        assert_eq!(t, time(12, 8, 8));
    }

    #[test]
    fn set_minute_carries_backward() {
        let mut t = time(12, 8, 8);
        t.set_minute(i64::from(t.minute()) - 110);
        assert_eq!(t, time(10, 18, 8));
    }

    #[test]
    fn set_hour_wraps_backward() {
        let mut t = time(10, 18, 8);
        t.set_hour(i64::from(t.hour()) - 36);
        assert_eq!(t, time(22, 18, 8));
    }

    // A negative multiple of the modulus must land exactly on zero, not
    // on the modulus itself.
    #[test]
    fn negative_multiple_of_modulus() {
        assert_eq!(time(0, 0, -60), time(23, 59, 0));
        assert_eq!(time(0, -60, 0), time(23, 0, 0));
        assert_eq!(time(-24, 0, 0), Time::midnight());
        assert_eq!(Time::from_seconds(-SECONDS_PER_DAY), Time::midnight());
    }

    #[test]
    fn from_seconds_wraps() {
        assert_eq!(Time::from_seconds(0), Time::midnight());
        assert_eq!(Time::from_seconds(SECONDS_PER_DAY), Time::midnight());
        assert_eq!(Time::from_seconds(-1), time(23, 59, 59));
        assert_eq!(Time::from_seconds(86_399), Time::MAX);
        assert_eq!(Time::from_seconds(2 * SECONDS_PER_DAY + 61), time(0, 1, 1));
    }

    #[test]
    fn total_seconds_roundtrip() {
        for second in 0..SECONDS_PER_DAY {
            let t = Time::from_seconds(second);
            assert_eq!(i64::from(t.total_seconds()), second);
        }
    }

    #[test]
    fn add_wraps() {
        assert_eq!(time(1, 2, 3) + time(3, 2, 1), time(4, 4, 4));
        assert_eq!(time(23, 0, 0) + time(2, 30, 0), time(1, 30, 0));
        let mut t = time(12, 0, 0);
        t += time(0, 59, 59);
        assert_eq!(t, time(12, 59, 59));
    }

    #[test]
    fn sub_is_absolute() {
        let lo = time(12, 0, 0);
        let hi = time(12, 0, 59);
        assert_eq!(hi - lo, time(0, 0, 59));
        assert_eq!(lo - hi, time(0, 0, 59));
        assert_eq!(lo - lo, Time::midnight());
        let mut t = time(12, 0, 0);
        t -= time(13, 0, 0);
        assert_eq!(t, time(1, 0, 0));
    }

    #[test]
    fn compare_with_strings() {
        let t = time(12, 0, 0);
        assert!(t.compare("12:00:59").unwrap() < 0);
        assert!(t.compare("11:59:59").unwrap() > 0);
        assert_eq!(t.compare("12:00").unwrap(), 0);
        assert!(t.equals("12:00:00").unwrap());
        assert!(!t.equals(Time::midnight()).unwrap());
        assert!(t.compare("nonsense").unwrap_err().is_format());
    }

    #[test]
    fn ordering() {
        assert!(time(12, 0, 0) < time(12, 0, 1));
        assert!(Time::MIN < Time::MAX);
        let mut times = vec![time(3, 0, 0), time(1, 0, 0), time(2, 0, 0)];
        times.sort();
        assert_eq!(times, vec![time(1, 0, 0), time(2, 0, 0), time(3, 0, 0)]);
    }

    #[test]
    fn display_and_debug() {
        let t = time(7, 8, 9);
        assert_eq!(t.to_string(), "07:08:09");
        assert_eq!(format!("{t:?}"), "07:08:09");
        assert_eq!(Time::midnight().to_string(), "00:00:00");
    }

    #[test]
    fn chrono_conversions() {
        let t = time(13, 14, 15);
        assert_eq!(t.to_naive(), NaiveTime::from_hms_opt(13, 14, 15).unwrap());
        assert_eq!(
            Time::from(NaiveTime::from_hms_opt(13, 14, 15).unwrap()),
            t,
        );

        let date = NaiveDate::from_ymd_opt(2020, 2, 10).unwrap();
        assert_eq!(
            t.to_datetime(date),
            date.and_hms_opt(13, 14, 15).unwrap(),
        );
        assert_eq!(
            t.to_datetime_with(2020, 2, 10).unwrap(),
            date.and_hms_opt(13, 14, 15).unwrap(),
        );
        assert!(t.to_datetime_with(2021, 2, 30).is_err());

        assert_eq!(Time::from(date.and_hms_opt(13, 14, 15).unwrap()), t);
    }

    #[test]
    fn now_is_normalized() {
        assert!(in_range(Time::now()));
    }

    quickcheck::quickcheck! {
        fn prop_always_in_range(t: Time) -> bool {
            in_range(t)
        }

        fn prop_string_roundtrip(t: Time) -> bool {
            t.to_string().parse::<Time>().map_or(false, |got| got == t)
        }

        fn prop_set_second_shifts_by_delta(t: Time, second: i64) -> bool {
            let mut got = t;
            got.set_second(second);
            let expected = (i128::from(t.total_seconds())
                - i128::from(t.second())
                + i128::from(second))
                .rem_euclid(i128::from(SECONDS_PER_DAY));
            in_range(got) && i128::from(got.total_seconds()) == expected
        }

        fn prop_add_is_modular(t1: Time, t2: Time) -> bool {
            let sum = t1 + t2;
            let expected = (i64::from(t1.total_seconds())
                + i64::from(t2.total_seconds()))
            .rem_euclid(SECONDS_PER_DAY);
            i64::from(sum.total_seconds()) == expected
        }

        fn prop_compare_agrees_with_ord(t1: Time, t2: Time) -> bool {
            let cmp = t1.compare(t2).unwrap();
            (cmp < 0) == (t1 < t2)
                && (cmp == 0) == (t1 == t2)
                && (cmp > 0) == (t1 > t2)
        }

        fn prop_sub_commutes(t1: Time, t2: Time) -> bool {
            t1 - t2 == t2 - t1
        }
    }
}
