/// Sub-GHz transceivers the receiver library has register maps for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RadioChip {
    /// TI CC1101.
    Cc1101,
    /// Semtech SX1276, run in FSK mode.
    Sx1276,
    /// Semtech SX1262, run in FSK mode.
    Sx1262,
}

impl RadioChip {
    /// Identifier reported on the console at startup.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cc1101 => "CC1101",
            Self::Sx1276 => "SX1276",
            Self::Sx1262 => "SX1262",
        }
    }
}

impl core::fmt::Display for RadioChip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_names() {
        assert_eq!(RadioChip::Cc1101.name(), "CC1101");
        assert_eq!(RadioChip::Sx1276.to_string(), "SX1276");
        assert_eq!(RadioChip::Sx1262.to_string(), "SX1262");
    }
}
