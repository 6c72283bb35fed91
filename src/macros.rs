//! Logging shims.
//!
//! `log` is an optional dependency (the `logging` feature). These macros
//! forward to it when enabled and compile to nothing otherwise, so call
//! sites never need their own `cfg` attributes.

#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => { ::log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(feature = "logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => { ::log::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}
