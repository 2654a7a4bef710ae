//! Fire control: a rate-limited trigger button driving the IR transmitter.

use embedded_hal::digital::InputPin;

use crate::{
    ir::{
        self,
        IrTransmitter,
    },
    timing::Window,
};

/// Polls the trigger button and emits shots.
///
/// The button is active-low: one side of a momentary switch goes to ground,
/// the other to an input with the MCU's internal pull-up, so no external
/// resistor is needed. Holding the trigger fires repeatedly at exactly the
/// cooloff cadence, never faster.
pub struct FireControl<B, T> {
    button: B,
    tx: T,
    cooldown: Window,
    address: u16,
}

impl<B: InputPin, T: IrTransmitter> FireControl<B, T> {
    pub fn new(button: B, tx: T, address: u16, cooloff_ms: u32) -> Self {
        Self {
            button,
            tx,
            cooldown: Window::new(cooloff_ms),
            address,
        }
    }

    /// One cooperative tick. Returns true when a shot was fired.
    ///
    /// Transmission is fire-and-forget; delivery is never verified. A button
    /// read error counts as "not pressed" and the next tick retries.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        let pressed = self.button.is_low().unwrap_or(false);
        if !pressed || !self.cooldown.is_ready(now_ms) {
            return false;
        }

        self.cooldown.restart(now_ms);
        self.tx
            .send(self.address, ir::FIRE_COMMAND, ir::FIRE_REPEATS);

        #[cfg(feature = "defmt")]
        defmt::info!("fire: shot sent, address {=u16}", self.address);

        true
    }
}
