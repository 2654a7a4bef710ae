//! Contracts for the external infrared codec.
//!
//! The actual modulation and demodulation (Sony SIRC at 38 kHz on the
//! reference hardware) lives outside this crate; board code wraps whatever
//! codec driver it uses in these traits.

/// Command code carried by every shot frame.
pub const FIRE_COMMAND: u8 = 0x1;

/// Additional burst repeats per shot.
pub const FIRE_REPEATS: u8 = 0;

/// One decoded unit of infrared data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Raw decoded payload. Zero means the capture was incomplete.
    pub raw: u32,
    /// Source device address.
    pub address: u16,
    /// Command code.
    pub command: u8,
    /// Decoder protocol name, diagnostics only.
    pub protocol: &'static str,
}

/// Encodes and emits a modulated infrared burst.
///
/// Fire-and-forget: there is no acknowledgement and no failure feedback.
pub trait IrTransmitter {
    fn send(&mut self, address: u16, command: u8, repeats: u8);
}

impl<T: IrTransmitter + ?Sized> IrTransmitter for &mut T {
    fn send(&mut self, address: u16, command: u8, repeats: u8) {
        T::send(self, address, command, repeats);
    }
}

/// Produces at most one decoded frame per burst.
///
/// If two bursts arrive between polls, only the most recent fully decoded
/// one is observed; earlier data is lost by design of the receiver.
pub trait IrReceiver {
    /// Non-blocking decode attempt.
    fn try_decode(&mut self) -> Option<Frame>;

    /// Re-arm the receiver. Must be called after every decode attempt,
    /// successful or not, before the next frame can be observed.
    fn resume(&mut self);
}

impl<T: IrReceiver + ?Sized> IrReceiver for &mut T {
    fn try_decode(&mut self) -> Option<Frame> {
        T::try_decode(self)
    }

    fn resume(&mut self) {
        T::resume(self);
    }
}
