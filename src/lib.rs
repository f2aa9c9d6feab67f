/*!
Normalized clock times on a 24 hour dial, with a signed variant for clock
durations.

The two central types are:

* [`Time`], a wall clock time in the half-open range
  `00:00:00..=23:59:59`. Every way of building or mutating a `Time` wraps
  out-of-range components instead of erroring, with overflow in one field
  carrying into the next. For example, adding `123` seconds to `12:10:11`
  yields `12:12:14`.
* [`SignedTime`], a direction attached to a `Time` magnitude. It is what
  subtraction of two clock times produces when the result may be negative.

# Examples

Normalization carries field overflow upward and wraps the hour around the
dial:

```
use hms::Time;

let t = Time::from_hms(12, 70, -30);
assert_eq!(t.to_string(), "13:09:30");
// 25 hours wraps past midnight.
assert_eq!(Time::from_hms(25, 0, 0), Time::from_hms(1, 0, 0));
```

Parsing accepts `HH:MM` and `HH:MM:SS`, and everything round-trips through
its canonical string:

```
use hms::Time;

let t: Time = "23:59".parse()?;
assert_eq!(t.to_string(), "23:59:00");
# Ok::<(), hms::Error>(())
```

Subtracting two clock times keeps the direction when you ask for it:

```
use hms::{SignedTime, Time};

let lo: Time = "12:00:00".parse()?;
let hi: Time = "12:00:59".parse()?;
// Unsigned subtraction is an absolute difference.
assert_eq!((lo - hi).to_string(), "00:00:59");
// Signed subtraction remembers which operand was bigger.
let diff = SignedTime::from(lo) - SignedTime::from(hi);
assert_eq!(diff.to_string(), "-00:00:59");
# Ok::<(), hms::Error>(())
```

# Crate features

* **serde** - Implements `Serialize` and `Deserialize` for [`Time`] and
  [`SignedTime`] via their canonical string forms.
* **logging** - Emits trace level messages from the parser through the
  [`log`](https://docs.rs/log) facade. Does nothing unless a `log`
  implementation is installed.
*/

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

pub use crate::{
    error::Error,
    signed::{IntoSignedTime, SignedTime},
    time::{IntoTime, Time},
};

#[macro_use]
mod logging;

mod error;
pub mod fmt;
mod signed;
mod time;
mod util;
