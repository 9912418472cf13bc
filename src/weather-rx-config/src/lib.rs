//! Static configuration consumed by the weather-sensor receiver library.
//!
//! Everything in here is resolved at compile time. The board crates provide
//! the matching [`BoardConfig`] wiring table; this crate owns the parts that
//! are identical across boards: which decoders run, how wind data is
//! represented, and which sensor IDs the receiver tracks.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod decoder;
pub mod filter;
pub mod radio;

pub use board::BoardConfig;
pub use decoder::{DecoderSet, WindDataFormat};
pub use filter::{SensorId, SensorIdFilter, SENSOR_IDS_EXCLUDE, SENSOR_IDS_INCLUDE, SENSOR_ID_FILTER};
pub use radio::RadioChip;

/// Decoder selection compiled into this build.
pub const DECODERS: DecoderSet = DecoderSet::DEFAULT;

/// Representation of decoded wind readings.
pub const WIND_DATA: WindDataFormat = WindDataFormat::FloatingPoint;

/// Number of sensor slots the receiver keeps state for.
///
/// Overridable at build time through the `WEATHER_RX_MAX_SENSORS`
/// environment variable.
pub const MAX_SENSORS: usize = weather_rx_utils::usize_from_env_or!("WEATHER_RX_MAX_SENSORS", 1);

/// Rejected receiver configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Every protocol decoder is disabled.
    NoDecoder,
    /// The sensor table has no slots.
    NoSensorSlots,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoDecoder => write!(f, "no protocol decoder enabled"),
            Self::NoSensorSlots => write!(f, "sensor table needs at least one slot"),
        }
    }
}

/// Checks the compiled-in values for combinations the receiver library
/// cannot work with.
pub fn validate() -> Result<(), ConfigError> {
    DECODERS.validate()?;
    if MAX_SENSORS == 0 {
        return Err(ConfigError::NoSensorSlots);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_configuration_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn one_sensor_slot_by_default() {
        assert_eq!(MAX_SENSORS, 1);
    }

    #[test]
    fn stock_decoder_selection() {
        assert_eq!(DECODERS, DecoderSet::DEFAULT);
        assert_eq!(WIND_DATA, WindDataFormat::FloatingPoint);
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            ConfigError::NoDecoder.to_string(),
            "no protocol decoder enabled"
        );
        assert_eq!(
            ConfigError::NoSensorSlots.to_string(),
            "sensor table needs at least one slot"
        );
    }
}
