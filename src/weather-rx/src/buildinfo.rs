//! Exposes information about the build.

use cfg_if::cfg_if;

/// Version of the configuration workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

cfg_if! {
    if #[cfg(feature = "esp32")] {
        /// The board name this build is configured for.
        pub const BOARD: &str = "esp32";
    } else if #[cfg(feature = "esp8266")] {
        /// The board name this build is configured for.
        pub const BOARD: &str = "esp8266";
    } else {
        /// The board name this build is configured for.
        pub const BOARD: &str = "unknown";
    }
}
