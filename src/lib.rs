//! # irtag
//!
//! Device support library for handheld infrared laser-tag devices.
//!
//! Provides the timing and polling state machines of a tagger:
//! - **Fire control**: rate-limited trigger button driving an IR transmitter
//! - **Hit detection**: filtering of decoded IR frames (incomplete capture,
//!   self-origin) into health damage
//! - **Health**: flat counter with a destroyed threshold
//! - **Feedback**: time-bounded status-LED pulses and optional sound cues
//!
//! Pins come from any `embedded-hal` 1.0 HAL; the IR codec and the
//! tone-synthesis engine are external collaborators behind [`IrTransmitter`],
//! [`IrReceiver`] and [`SoundPlayer`].
//!
//! Everything runs from one cooperative polling loop: no interrupts for
//! application logic, no allocation, no blocking. [`Device::poll`] completes
//! immediately on every tick.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let config = irtag::Config::new(MY_ADDRESS);
//! let mut device = irtag::Device::new(config, trigger_pin, ir_tx, ir_rx)
//!     .with_fire_led(fire_led_pin)
//!     .with_hit_led(hit_led_pin)
//!     .with_sound(speaker);
//!
//! loop {
//!     device.poll(now_ms());
//!     delay.delay_millis(POLL_INTERVAL_MS);
//! }
//! ```
//!
//! The poll interval is a cooperative scheduling parameter chosen by the
//! caller; the reference firmware uses a few milliseconds.

#![no_std]

mod device;
mod feedback;
mod fire;
mod health;
mod hit;
pub mod ir;
pub mod sound;
pub mod timing;

pub use device::{
    Config,
    Device,
    PollOutcome,
};
pub use feedback::{
    NoPin,
    Pulse,
    StatusLed,
};
pub use fire::FireControl;
pub use health::{
    HIT_DAMAGE,
    Health,
    START_HEALTH,
};
pub use hit::{
    HitDetect,
    HitOutcome,
    IgnoreReason,
};
pub use ir::{
    Frame,
    IrReceiver,
    IrTransmitter,
};
pub use sound::{
    Cue,
    NoSound,
    SoundPlayer,
};
