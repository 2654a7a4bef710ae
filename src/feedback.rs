//! Time-bounded status-LED pulses.

use core::convert::Infallible;

use embedded_hal::digital::{
    ErrorType,
    OutputPin,
};

use crate::timing;

/// A timed ON state that reverts to OFF on its own.
///
/// Two states, checked every tick: ON while `now - start <= duration`, OFF
/// otherwise. Restarting an ON pulse extends it from the new start time.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    duration_ms: u32,
    started_ms: Option<u32>,
}

impl Pulse {
    #[must_use]
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            started_ms: None,
        }
    }

    /// Begin (or re-begin) the pulse at `now_ms`.
    pub fn start(&mut self, now_ms: u32) {
        self.started_ms = Some(now_ms);
    }

    /// True while the pulse is running.
    #[must_use]
    pub fn is_on(&self, now_ms: u32) -> bool {
        match self.started_ms {
            Some(start) => !timing::ready(start, now_ms, self.duration_ms),
            None => false,
        }
    }
}

/// A status LED wired with inverted logic: the pin idles high and is pulled
/// low to light the LED.
pub struct StatusLed<P> {
    pin: P,
    pulse: Pulse,
    lit: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Take ownership of the pin and drive it high (LED off).
    pub fn new(mut pin: P, duration_ms: u32) -> Self {
        let _ = pin.set_high();
        Self {
            pin,
            pulse: Pulse::new(duration_ms),
            lit: false,
        }
    }

    /// Light the LED for the configured duration.
    pub fn start(&mut self, now_ms: u32) {
        self.pulse.start(now_ms);
        let _ = self.pin.set_low();
        self.lit = true;
    }

    /// Expiry check, run every tick. A failed pin write leaves the LED lit
    /// and the next tick tries again.
    pub fn poll(&mut self, now_ms: u32) {
        if self.lit && !self.pulse.is_on(now_ms) && self.pin.set_high().is_ok() {
            self.lit = false;
        }
    }

    #[must_use]
    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

/// Stand-in output for a status LED that is not fitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}
