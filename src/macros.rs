// Logging shims. With `verbose-logging` these forward to the `log` facade,
// otherwise the arguments are type-checked and discarded.

#[cfg(feature = "verbose-logging")]
#[allow(unused_macros)]
macro_rules! fft_debug {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "verbose-logging"))]
#[allow(unused_macros)]
macro_rules! fft_debug {
    ($($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

#[cfg(feature = "verbose-logging")]
#[allow(unused_macros)]
macro_rules! fft_trace {
    ($($arg:tt)*) => {
        ::log::trace!($($arg)*)
    };
}

#[cfg(not(feature = "verbose-logging"))]
#[allow(unused_macros)]
macro_rules! fft_trace {
    ($($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

#[cfg(feature = "verbose-logging")]
#[allow(unused_macros)]
macro_rules! fft_warn {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

#[cfg(not(feature = "verbose-logging"))]
#[allow(unused_macros)]
macro_rules! fft_warn {
    ($($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}
