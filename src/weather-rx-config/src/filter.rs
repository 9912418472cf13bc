/// 32-bit identifier a sensor transmits in every frame.
pub type SensorId = u32;

/// Sensor IDs the receiver should track exclusively.
///
/// Empty means no restriction. Populated by the deployment, not by the
/// boards.
pub const SENSOR_IDS_INCLUDE: &[SensorId] = &[];

/// Sensor IDs the receiver must ignore, e.g. a neighbour's station.
pub const SENSOR_IDS_EXCLUDE: &[SensorId] = &[];

/// Filter compiled from [`SENSOR_IDS_INCLUDE`] and [`SENSOR_IDS_EXCLUDE`].
pub const SENSOR_ID_FILTER: SensorIdFilter =
    SensorIdFilter::new(SENSOR_IDS_INCLUDE, SENSOR_IDS_EXCLUDE);

/// Accept/reject decision for incoming sensor IDs.
///
/// The exclude list wins over the include list. An empty include list
/// accepts everything that is not excluded.
#[derive(Debug, Copy, Clone)]
pub struct SensorIdFilter {
    include: &'static [SensorId],
    exclude: &'static [SensorId],
}

impl SensorIdFilter {
    pub const fn new(include: &'static [SensorId], exclude: &'static [SensorId]) -> Self {
        Self { include, exclude }
    }

    /// Whether frames from `id` are handed to the decoders.
    pub fn accepts(&self, id: SensorId) -> bool {
        if self.exclude.contains(&id) {
            return false;
        }
        self.include.is_empty() || self.include.contains(&id)
    }

    /// True when every sensor in range gets through.
    pub const fn is_unrestricted(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_lists_are_empty() {
        assert!(SENSOR_IDS_INCLUDE.is_empty());
        assert!(SENSOR_IDS_EXCLUDE.is_empty());
        assert!(SENSOR_ID_FILTER.is_unrestricted());
    }

    #[test]
    fn unrestricted_filter_accepts_anything() {
        assert!(SENSOR_ID_FILTER.accepts(0));
        assert!(SENSOR_ID_FILTER.accepts(0x3902_4cf2));
        assert!(SENSOR_ID_FILTER.accepts(SensorId::MAX));
    }

    #[test]
    fn exclude_list_drops_listed_ids() {
        let filter = SensorIdFilter::new(&[], &[0x1111, 0x2222]);

        assert!(!filter.accepts(0x1111));
        assert!(!filter.accepts(0x2222));
        assert!(filter.accepts(0x3333));
    }

    #[test]
    fn populated_include_list_restricts() {
        let filter = SensorIdFilter::new(&[0xaaaa], &[]);

        assert!(filter.accepts(0xaaaa));
        assert!(!filter.accepts(0xbbbb));
    }

    #[test]
    fn exclude_wins_over_include() {
        let filter = SensorIdFilter::new(&[0xaaaa], &[0xaaaa]);

        assert!(!filter.accepts(0xaaaa));
    }
}
