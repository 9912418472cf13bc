#![cfg_attr(not(test), no_std)]

use weather_rx_config::{BoardConfig, RadioChip};
use weather_rx_debug::log::info;

/// Generic ESP32 devkit with the CC1101 module on the VSPI pins.
pub const CONFIG: BoardConfig = BoardConfig {
    receiver_cs: 5,
    receiver_irq: 4,
    receiver_gpio: 4,
    receiver_isr: 4,
    led: 2,
    radio: RadioChip::Cc1101,
};

pub fn init() {
    info!("esp32::init()");
}
