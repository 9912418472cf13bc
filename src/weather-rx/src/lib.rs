//! Board-level configuration of a multi-protocol weather-sensor radio
//! receiver.
//!
//! The receiver library itself (demodulation, framing, protocol decoding)
//! lives elsewhere. This workspace pins down everything it needs to know
//! about the board it runs on: the transceiver wiring, the active decoders,
//! the console, and the sensor-ID filters.
//!
//! # Cargo features
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

pub mod buildinfo;

#[cfg(not(feature = "no-boards"))]
#[doc(inline)]
pub use weather_rx_boards::board;
#[doc(inline)]
pub use weather_rx_config as config;
#[doc(inline)]
pub use weather_rx_debug as debug;

/// Brings the board up and reports the compiled-in receiver setup.
#[cfg(not(feature = "no-boards"))]
pub fn init() {
    if let Err(err) = config::validate() {
        debug::log::error!("receiver configuration rejected: {}", err);
        return;
    }

    board::init();

    debug::log::info!(
        "{} radio, cs {} irq {} led {}",
        board::CONFIG.radio,
        board::CONFIG.receiver_cs,
        board::CONFIG.receiver_irq,
        board::CONFIG.led
    );
}
