#![cfg_attr(not(test), no_std)]

use weather_rx_config::{BoardConfig, RadioChip};
use weather_rx_debug::log::info;

/// Legacy ESP8266 wiring, kept for boards still in the field.
///
/// No console backend exists for this target, so the log macros degrade to
/// no-ops here.
pub const CONFIG: BoardConfig = BoardConfig {
    receiver_cs: 15,
    receiver_irq: 4,
    receiver_gpio: 4,
    receiver_isr: 4,
    led: 2,
    radio: RadioChip::Cc1101,
};

pub fn init() {
    info!("esp8266::init()");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cc1101_wiring() {
        assert_eq!(CONFIG.receiver_cs, 15);
        assert_eq!(CONFIG.receiver_irq, 4);
        assert_eq!(CONFIG.receiver_gpio, 4);
        assert_eq!(CONFIG.receiver_isr, 4);
        assert_eq!(CONFIG.led, 2);
        assert_eq!(CONFIG.radio, RadioChip::Cc1101);
    }
}
