//! Internal logging shim.
//!
//! `trace_event!(level, ...)` forwards to the matching `tracing` macro when the
//! `tracing` feature is enabled and expands to `()` otherwise, so call sites never
//! need their own `cfg` attributes. Arguments are not evaluated when the feature is off.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        ()
    };
}
