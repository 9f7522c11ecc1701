//! Internal logging shims. With the `log` feature disabled the arguments are still type-checked
//! but nothing is formatted or emitted.

#[cfg(feature = "log")]
macro_rules! re_trace {
    ($($arg:tt)+) => {
        log::trace!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    ($($arg:tt)+) => {{
        let _ = || format!($($arg)+);
    }};
}

#[cfg(feature = "log")]
macro_rules! re_debug {
    ($($arg:tt)+) => {
        log::debug!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! re_debug {
    ($($arg:tt)+) => {{
        let _ = || format!($($arg)+);
    }};
}
