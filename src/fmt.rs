// Backend dispatch adapted from esp-hal: https://github.com/esp-rs/esp-hal/blob/main/esp-hal/src/fmt.rs
//
// Every macro takes the active `LogLevel` first, followed by `;`, so the
// platform's runtime level filters before the backend sees anything.

#![macro_use]
#![allow(unused_macros)]

macro_rules! emit {
    ($m:ident, $s:literal $(, $x:expr)* $(,)?) => {
        {
            cfg_if::cfg_if! {
                if #[cfg(feature = "log")] {
                    ::log::$m!($s $(, $x)*);
                } else if #[cfg(feature = "defmt")] {
                    ::defmt::$m!($s $(, $x)*);
                } else {
                    let _ = ($( & $x ),*);
                }
            }
        }
    };
}

macro_rules! trace {
    ($level:expr; $s:literal $(, $x:expr)* $(,)?) => {
        if $level.enables($crate::LogLevel::Verbose) {
            emit!(trace, $s $(, $x)*);
        }
    };
}

macro_rules! debug {
    ($level:expr; $s:literal $(, $x:expr)* $(,)?) => {
        if $level.enables($crate::LogLevel::Debug) {
            emit!(debug, $s $(, $x)*);
        }
    };
}

macro_rules! info {
    ($level:expr; $s:literal $(, $x:expr)* $(,)?) => {
        if $level.enables($crate::LogLevel::Info) {
            emit!(info, $s $(, $x)*);
        }
    };
}

macro_rules! warn {
    ($level:expr; $s:literal $(, $x:expr)* $(,)?) => {
        if $level.enables($crate::LogLevel::Warn) {
            emit!(warn, $s $(, $x)*);
        }
    };
}

macro_rules! error {
    ($level:expr; $s:literal $(, $x:expr)* $(,)?) => {
        if $level.enables($crate::LogLevel::Error) {
            emit!(error, $s $(, $x)*);
        }
    };
}
