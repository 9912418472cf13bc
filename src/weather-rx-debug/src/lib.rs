//! Console binding and severity-levelled logging for the receiver firmware.
//!
//! `print!`/`println!` forward to whatever console the active backend
//! provides. The [`log`] macros prepend a one-letter severity prefix and
//! terminate the line, so `log::info!("rssi {}", rssi)` comes out as
//! `I: rssi -67` on the serial monitor.

#![cfg_attr(not(test), no_std)]

/// Severity of a console line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    Debug,
    Error,
    Warning,
    Info,
    Verbose,
}

impl Level {
    /// One-letter prefix emitted in front of every line of this severity.
    pub const fn prefix(self) -> &'static str {
        match self {
            Level::Debug => "D",
            Level::Error => "E",
            Level::Warning => "W",
            Level::Info => "I",
            Level::Verbose => "V",
        }
    }
}

/// Renders `"<prefix>: <args>\n"` into `out`.
///
/// This is the exact line format the [`log`] macros produce. Verbose lines
/// are suppressed entirely.
pub fn write_line<W: core::fmt::Write>(
    out: &mut W,
    level: Level,
    args: core::fmt::Arguments<'_>,
) -> core::fmt::Result {
    if let Level::Verbose = level {
        return Ok(());
    }
    out.write_str(level.prefix())?;
    out.write_str(": ")?;
    out.write_fmt(args)?;
    out.write_char('\n')
}

#[cfg(all(feature = "debug-console", target_os = "none", feature = "esp32"))]
mod backend {
    pub use esp_println::{print, println};
}

#[cfg(all(feature = "debug-console", not(target_os = "none")))]
mod backend {
    extern crate std;

    pub use std::{print, println};
}

// No console is available here (the ESP8266 target has no backend), so
// output macros consume their arguments and emit nothing.
#[cfg(any(
    not(feature = "debug-console"),
    all(target_os = "none", not(feature = "esp32"))
))]
mod backend {
    #[macro_export]
    macro_rules! nop_println {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*);
            // Do nothing
        }};
    }

    #[macro_export]
    macro_rules! nop_print {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*);
            // Do nothing
        }};
    }

    pub use nop_print as print;
    pub use nop_println as println;
}

pub use backend::*;

/// Severity-levelled output macros.
///
/// Each macro takes `format_args!`-style input. `verbose!` never emits
/// anything and exists so call sites stay valid at every level.
pub mod log {
    #[macro_export]
    macro_rules! __log_debug {
        ($($arg:tt)*) => {{
            $crate::println!("D: {}", ::core::format_args!($($arg)*));
        }};
    }

    #[macro_export]
    macro_rules! __log_error {
        ($($arg:tt)*) => {{
            $crate::println!("E: {}", ::core::format_args!($($arg)*));
        }};
    }

    #[macro_export]
    macro_rules! __log_warn {
        ($($arg:tt)*) => {{
            $crate::println!("W: {}", ::core::format_args!($($arg)*));
        }};
    }

    #[macro_export]
    macro_rules! __log_info {
        ($($arg:tt)*) => {{
            $crate::println!("I: {}", ::core::format_args!($($arg)*));
        }};
    }

    #[macro_export]
    macro_rules! __log_verbose {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*); // Do nothing
        }};
    }

    pub use __log_debug as debug;
    pub use __log_error as error;
    pub use __log_info as info;
    pub use __log_verbose as verbose;
    pub use __log_warn as warn;
}
