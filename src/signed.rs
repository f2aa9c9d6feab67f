use core::{
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use chrono::{NaiveDateTime, NaiveTime};

use crate::{
    error::Error,
    fmt::{StdFmtWrite, TimeParser, TimePrinter},
    time::{Time, SECONDS_PER_DAY},
};

/// A clock time with a direction: a [`Time`] magnitude and a sign.
///
/// This is what subtracting two clock times produces when the result may
/// be negative. The magnitude is an ordinary `Time`, so it goes through
/// exactly the same normalization, and the whole value lives in
/// `-23:59:59..=23:59:59`.
///
/// ```
/// use hms::SignedTime;
///
/// let early: SignedTime = "12:00:00".parse()?;
/// let late: SignedTime = "12:00:59".parse()?;
/// assert_eq!((early - late).to_string(), "-00:00:59");
/// assert_eq!((late - early).to_string(), "00:00:59");
/// # Ok::<(), hms::Error>(())
/// ```
///
/// # Zero has no sign
///
/// A `SignedTime` may internally hold a negative sign with a zero
/// magnitude, for example after subtracting a value from itself and
/// flipping the sign. Such a value is indistinguishable from positive
/// zero: it compares equal to it, hashes like it and never prints a `-`.
///
/// # Construction
///
/// The sign is only ever `1` or `-1`. Constructors that take it as an
/// argument reject anything else with an error for which
/// [`Error::is_invalid_sign`] returns true. [`SignedTime::from_seconds`]
/// instead derives the sign from the count itself.
#[derive(Clone, Copy)]
pub struct SignedTime {
    sign: i8,
    time: Time,
}

impl SignedTime {
    /// Creates a new `SignedTime` from a sign and each component of its
    /// magnitude.
    ///
    /// The components normalize exactly like [`Time::from_hms`]. The sign
    /// must be `1` or `-1`, anything else is an error:
    ///
    /// ```
    /// use hms::SignedTime;
    ///
    /// let t = SignedTime::from_hms(-1, 1, 30, 0)?;
    /// assert_eq!(t.to_string(), "-01:30:00");
    /// assert!(SignedTime::from_hms(0, 1, 30, 0).unwrap_err().is_invalid_sign());
    /// # Ok::<(), hms::Error>(())
    /// ```
    pub fn from_hms(
        sign: i8,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Result<SignedTime, Error> {
        if sign != 1 && sign != -1 {
            return Err(Error::sign(i64::from(sign)));
        }
        Ok(SignedTime { sign, time: Time::from_hms(hour, minute, second) })
    }

    /// Creates a new `SignedTime` from a signed count of seconds.
    ///
    /// The sign of the count becomes the sign of the value (a
    /// non-negative count is positive), and its magnitude wraps around
    /// the dial:
    ///
    /// ```
    /// use hms::SignedTime;
    ///
    /// assert_eq!(SignedTime::from_seconds(-5_400).to_string(), "-01:30:00");
    /// assert_eq!(SignedTime::from_seconds(90_000).to_string(), "01:00:00");
    /// ```
    pub fn from_seconds(seconds: i64) -> SignedTime {
        let sign = if seconds < 0 { -1 } else { 1 };
        // `unsigned_abs` rather than `abs`, which has no valid answer for
        // `i64::MIN`.
        let magnitude = (seconds.unsigned_abs() % (SECONDS_PER_DAY as u64)) as i64;
        SignedTime { sign, time: Time::from_seconds(magnitude) }
    }

    /// Returns the zero value, a positive `00:00:00`.
    ///
    /// This is also what the `Default` implementation returns.
    pub const fn zero() -> SignedTime {
        SignedTime { sign: 1, time: Time::midnight() }
    }

    /// Returns the current wall clock time in the system's local time
    /// zone, as a positive value.
    pub fn now() -> SignedTime {
        SignedTime::from(Time::now())
    }

    pub(crate) fn from_parts(sign: i8, time: Time) -> SignedTime {
        debug_assert!(sign == 1 || sign == -1, "invalid sign {sign}");
        SignedTime { sign, time }
    }

    /// Returns the sign of this value: `1` when positive, `-1` when
    /// negative.
    ///
    /// Note that a zero magnitude may report either sign. Use
    /// [`SignedTime::is_negative`] to ask about the value as a whole.
    pub fn signum(&self) -> i8 {
        self.sign
    }

    /// Returns true when this value is strictly less than zero.
    ///
    /// A zero magnitude is never negative, whatever its sign.
    pub fn is_negative(&self) -> bool {
        self.total_seconds() < 0
    }

    /// Returns this value's magnitude as an unsigned [`Time`].
    pub fn abs(&self) -> Time {
        self.time
    }

    /// Returns the "hour" component of this value's magnitude, in
    /// `0..=23`.
    pub fn hour(&self) -> i8 {
        self.time.hour()
    }

    /// Returns the "minute" component of this value's magnitude, in
    /// `0..=59`.
    pub fn minute(&self) -> i8 {
        self.time.minute()
    }

    /// Returns the "second" component of this value's magnitude, in
    /// `0..=59`.
    pub fn second(&self) -> i8 {
        self.time.second()
    }

    /// Returns this value as a signed count of seconds, in
    /// `-86_399..=86_399`.
    pub fn total_seconds(&self) -> i32 {
        i32::from(self.sign) * self.time.total_seconds()
    }

    /// Sets the sign of this value. The sign must be `1` or `-1`,
    /// anything else is an error.
    pub fn set_sign(&mut self, sign: i8) -> Result<(), Error> {
        if sign != 1 && sign != -1 {
            return Err(Error::sign(i64::from(sign)));
        }
        self.sign = sign;
        Ok(())
    }

    /// Sets the hours component of this value's magnitude, wrapping like
    /// [`Time::set_hour`].
    pub fn set_hour(&mut self, hour: i64) {
        self.time.set_hour(hour);
    }

    /// Sets the minutes component of this value's magnitude, carrying and
    /// wrapping like [`Time::set_minute`].
    pub fn set_minute(&mut self, minute: i64) {
        self.time.set_minute(minute);
    }

    /// Sets the seconds component of this value's magnitude, carrying and
    /// wrapping like [`Time::set_second`].
    pub fn set_second(&mut self, second: i64) {
        self.time.set_second(second);
    }

    /// Returns this value with its sign flipped.
    ///
    /// This is used by the unary `-` operator.
    pub fn negate(self) -> SignedTime {
        SignedTime { sign: -self.sign, ..self }
    }

    /// Adds two signed clock times on the number line, wrapping the
    /// resulting magnitude around the dial.
    ///
    /// This is used by the `+` operator.
    pub fn wrapping_add(self, other: SignedTime) -> SignedTime {
        SignedTime::from_seconds(
            i64::from(self.total_seconds()) + i64::from(other.total_seconds()),
        )
    }

    /// Subtracts two signed clock times on the number line, keeping the
    /// direction of the result.
    ///
    /// This is used by the `-` operator. Compare with [`Time::abs_diff`],
    /// which discards it.
    ///
    /// ```
    /// use hms::SignedTime;
    ///
    /// let lo = SignedTime::from_seconds(10);
    /// let hi = SignedTime::from_seconds(30);
    /// assert_eq!((lo - hi).total_seconds(), -20);
    /// ```
    pub fn wrapping_sub(self, other: SignedTime) -> SignedTime {
        SignedTime::from_seconds(
            i64::from(self.total_seconds()) - i64::from(other.total_seconds()),
        )
    }

    /// Compares this value with another, where the other may be anything
    /// that converts into a `SignedTime`, including its string form.
    ///
    /// Returns a negative number when `self` is smaller, zero when equal
    /// and a positive number when `self` is bigger. The only error comes
    /// from parsing a string operand.
    pub fn compare(self, other: impl IntoSignedTime) -> Result<i32, Error> {
        let other = other.into_signed_time()?;
        Ok(self.total_seconds() - other.total_seconds())
    }

    /// Returns true when this value and the given one denote the same
    /// signed offset. Like [`SignedTime::compare`], the operand may be a
    /// string.
    pub fn equals(
        self,
        other: impl IntoSignedTime,
    ) -> Result<bool, Error> {
        Ok(self.compare(other)? == 0)
    }

    /// Resolves this value against the given reference datetime.
    ///
    /// A positive value names a wall clock time on the reference's own
    /// date, so the reference's clock is simply replaced. A negative
    /// value is an offset backward from the reference, which may cross
    /// into the previous day:
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hms::SignedTime;
    ///
    /// let reference = NaiveDate::from_ymd_opt(2020, 2, 10)
    ///     .unwrap()
    ///     .and_hms_opt(1, 0, 0)
    ///     .unwrap();
    ///
    /// let positive: SignedTime = "05:30:00".parse()?;
    /// assert_eq!(
    ///     positive.to_datetime(reference).to_string(),
    ///     "2020-02-10 05:30:00",
    /// );
    ///
    /// let negative: SignedTime = "-02:00:00".parse()?;
    /// assert_eq!(
    ///     negative.to_datetime(reference).to_string(),
    ///     "2020-02-09 23:00:00",
    /// );
    /// # Ok::<(), hms::Error>(())
    /// ```
    pub fn to_datetime(self, reference: NaiveDateTime) -> NaiveDateTime {
        if self.is_negative() {
            reference
                - chrono::Duration::seconds(i64::from(
                    self.time.total_seconds(),
                ))
        } else {
            reference.date().and_time(self.time.to_naive())
        }
    }

    /// Resolves this value against the current local datetime, like
    /// [`SignedTime::to_datetime`].
    pub fn to_datetime_today(self) -> NaiveDateTime {
        self.to_datetime(chrono::Local::now().naive_local())
    }
}

/// The default value, a positive `00:00:00`.
impl Default for SignedTime {
    fn default() -> SignedTime {
        SignedTime::zero()
    }
}

// Comparison traits go through `total_seconds` so that a negative sign on
// a zero magnitude is invisible.

impl PartialEq for SignedTime {
    fn eq(&self, other: &SignedTime) -> bool {
        self.total_seconds() == other.total_seconds()
    }
}

impl Eq for SignedTime {}

impl PartialOrd for SignedTime {
    fn partial_cmp(&self, other: &SignedTime) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SignedTime {
    fn cmp(&self, other: &SignedTime) -> core::cmp::Ordering {
        self.total_seconds().cmp(&other.total_seconds())
    }
}

impl core::hash::Hash for SignedTime {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.total_seconds().hash(state);
    }
}

impl core::fmt::Display for SignedTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        static PRINTER: TimePrinter = TimePrinter::new();
        PRINTER
            .print_signed_time(self, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::fmt::Debug for SignedTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        core::fmt::Debug::fmt(&self.time, f)
    }
}

impl FromStr for SignedTime {
    type Err = Error;

    fn from_str(string: &str) -> Result<SignedTime, Error> {
        TimeParser::new().parse_signed_time(string.as_bytes())
    }
}

impl<'a> TryFrom<&'a str> for SignedTime {
    type Error = Error;

    fn try_from(string: &'a str) -> Result<SignedTime, Error> {
        string.parse()
    }
}

impl From<Time> for SignedTime {
    fn from(time: Time) -> SignedTime {
        SignedTime { sign: 1, time }
    }
}

impl From<NaiveTime> for SignedTime {
    fn from(time: NaiveTime) -> SignedTime {
        SignedTime::from(Time::from(time))
    }
}

impl From<NaiveDateTime> for SignedTime {
    fn from(datetime: NaiveDateTime) -> SignedTime {
        SignedTime::from(Time::from(datetime))
    }
}

/// Flips the sign.
impl Neg for SignedTime {
    type Output = SignedTime;

    fn neg(self) -> SignedTime {
        self.negate()
    }
}

/// Adds two signed clock times, wrapping the magnitude around the dial.
impl Add for SignedTime {
    type Output = SignedTime;

    fn add(self, rhs: SignedTime) -> SignedTime {
        self.wrapping_add(rhs)
    }
}

/// Adds two signed clock times, wrapping the magnitude around the dial.
impl AddAssign for SignedTime {
    fn add_assign(&mut self, rhs: SignedTime) {
        *self = *self + rhs;
    }
}

/// Subtracts two signed clock times, keeping the direction of the result.
impl Sub for SignedTime {
    type Output = SignedTime;

    fn sub(self, rhs: SignedTime) -> SignedTime {
        self.wrapping_sub(rhs)
    }
}

/// Subtracts two signed clock times, keeping the direction of the result.
impl SubAssign for SignedTime {
    fn sub_assign(&mut self, rhs: SignedTime) {
        *self = *self - rhs;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SignedTime {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SignedTime {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<SignedTime, D::Error> {
        use serde::de;

        struct SignedTimeVisitor;

        impl<'de> de::Visitor<'de> for SignedTimeVisitor {
            type Value = SignedTime;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a signed clock time string")
            }

            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<SignedTime, E> {
                TimeParser::new()
                    .parse_signed_time(value)
                    .map_err(de::Error::custom)
            }

            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<SignedTime, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(SignedTimeVisitor)
    }
}

/// A conversion trait for APIs that accept a signed clock time or its
/// string form interchangeably, like [`SignedTime::compare`].
///
/// An unsigned [`Time`] converts too, as a positive value.
pub trait IntoSignedTime {
    /// Converts this value into a [`SignedTime`].
    fn into_signed_time(self) -> Result<SignedTime, Error>;
}

impl IntoSignedTime for SignedTime {
    fn into_signed_time(self) -> Result<SignedTime, Error> {
        Ok(self)
    }
}

impl IntoSignedTime for &SignedTime {
    fn into_signed_time(self) -> Result<SignedTime, Error> {
        Ok(*self)
    }
}

impl IntoSignedTime for Time {
    fn into_signed_time(self) -> Result<SignedTime, Error> {
        Ok(SignedTime::from(self))
    }
}

impl IntoSignedTime for &str {
    fn into_signed_time(self) -> Result<SignedTime, Error> {
        self.parse()
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for SignedTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> SignedTime {
        SignedTime::from_seconds(i64::arbitrary(g))
    }
}
