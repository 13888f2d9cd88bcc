//! Battery charge tracking.
//!
//! The battery service clamps to `0..=100` before delivery, so the
//! value is stored as-is. The percent feeds the battery arc fill and
//! the bottom-left label.

use core::fmt::Write;

use heapless::String;

#[derive(Debug, Default)]
pub struct BatteryModel {
    percent: u8,
}

impl BatteryModel {
    pub const fn new() -> Self { Self { percent: 0 } }

    /// Record a charge reading from the battery service.
    #[inline]
    pub const fn record_charge(
        &mut self,
        percent: u8,
    ) {
        self.percent = percent;
    }

    #[inline]
    pub const fn percent(&self) -> u8 { self.percent }

    /// Two-digit-padded label, e.g. "07%".
    pub fn battery_text(&self) -> String<8> {
        let mut text = String::new();
        let _ = write!(text, "{:02}%", self.percent);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_charge() {
        let mut battery = BatteryModel::new();
        battery.record_charge(45);
        assert_eq!(battery.percent(), 45);
    }

    #[test]
    fn test_battery_text_padding() {
        let mut battery = BatteryModel::new();
        battery.record_charge(7);
        assert_eq!(battery.battery_text().as_str(), "07%");
        battery.record_charge(100);
        assert_eq!(battery.battery_text().as_str(), "100%");
    }
}
