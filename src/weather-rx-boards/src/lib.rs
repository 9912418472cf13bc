#![cfg_attr(not(test), no_std)]

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "esp32")] {
        pub use esp32 as board;
    } else if #[cfg(feature = "esp8266")] {
        pub use esp8266 as board;
    } else if #[cfg(feature = "no-boards")] {
        // Do nothing
    } else {
        compile_error!("no board feature selected");
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "esp32")]
    #[test]
    fn default_board_is_the_esp32_cc1101_wiring() {
        use weather_rx_config::RadioChip;

        assert_eq!(super::board::CONFIG.receiver_cs, 5);
        assert_eq!(super::board::CONFIG.radio, RadioChip::Cc1101);
    }
}
