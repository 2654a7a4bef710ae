//! Flat health counter.

/// Health every device starts with.
pub const START_HEALTH: i32 = 100;

/// Health lost per registered hit.
pub const HIT_DAMAGE: i32 = 30;

/// The device's health counter.
///
/// Only ever decremented, with no floor — it can go arbitrarily negative.
/// There is no reset; power-cycle the device to restore health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Health(i32);

impl Health {
    #[must_use]
    pub const fn new() -> Self {
        Self(START_HEALTH)
    }

    pub fn damage(&mut self, amount: i32) {
        self.0 = self.0.saturating_sub(amount);
    }

    /// Current health. Negative once the device is destroyed.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// True once health has crossed below zero. Terminal: nothing further is
    /// defined beyond the die feedback cue.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.0 < 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new()
    }
}
