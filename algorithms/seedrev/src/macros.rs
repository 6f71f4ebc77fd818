//! Logging shims that compile away without the `log` feature.

macro_rules! search_trace {
    ($($arg:expr),*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg),*);
        #[cfg(not(feature = "log"))]
        $( let _ = $arg );*; // suppress unused variable warnings
    }
}

macro_rules! search_debug {
    ($($arg:expr),*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg),*);
        #[cfg(not(feature = "log"))]
        $( let _ = $arg );*; // suppress unused variable warnings
    }
}
