use crate::radio::RadioChip;

/// Wiring of the receiver module, one table per supported board.
///
/// The GDO and ISR lines duplicate the interrupt pin on current boards; the
/// receiver library expects all of them to be assigned even when it only
/// drives GDO0.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Chip-select line of the transceiver.
    pub receiver_cs: u8,
    /// GDO0, raised by the transceiver when a frame is ready.
    pub receiver_irq: u8,
    /// Auxiliary GDO line.
    pub receiver_gpio: u8,
    /// Interrupt service line.
    pub receiver_isr: u8,
    /// Status LED, toggled on reception.
    pub led: u8,
    /// Transceiver wired to the SPI bus.
    pub radio: RadioChip,
}
