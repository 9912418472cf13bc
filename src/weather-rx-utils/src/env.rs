//! Configuration values sourced from environment variables at compile time.
//!
//! Values are read with `option_env!`, so an override is baked into the
//! binary when the crate is compiled and never looked up at runtime. A
//! malformed override aborts the build instead of silently falling back.

pub use {const_panic, konst};

macro_rules! define_env_with_default_macro {
    ($macro_name:ident, $parse_fn_name:ident, $output_type_name:literal) => {
        #[macro_export]
        macro_rules! $macro_name {
            ($env_var:literal, $default:expr) => {
                if let Some(str_value) = option_env!($env_var) {
                    if let Ok(value) = $crate::env::konst::primitive::$parse_fn_name(str_value) {
                        value
                    } else {
                        $crate::env::const_panic::concat_panic!(
                            "Could not parse environment variable `",
                            $env_var,
                            "=",
                            str_value,
                            "` as ",
                            $output_type_name,
                        );
                    }
                } else {
                    $default
                }
            };
        }
    };
}

define_env_with_default_macro!(usize_from_env_or, parse_usize, "a usize");

#[cfg(test)]
mod tests {
    #[test]
    fn unset_variable_falls_back_to_default() {
        const SLOTS: usize = usize_from_env_or!("WEATHER_RX_ENV_TEST_UNSET", 7);
        assert_eq!(SLOTS, 7);
    }
}
