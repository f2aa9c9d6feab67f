/*!
A lightweight logging proxy for the `log` crate.

The crate only logs when the `logging` feature is enabled. These macros
expand to nothing otherwise, so call sites don't need their own `cfg`
gates.
*/

// Some feature combinations result in some of these macros never being
// used. Which is fine.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}
