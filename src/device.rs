//! The device context: all mutable state, one cooperative poll.

use embedded_hal::digital::{
    InputPin,
    OutputPin,
};

use crate::{
    feedback::{
        NoPin,
        StatusLed,
    },
    fire::FireControl,
    health::Health,
    hit::{
        HitDetect,
        HitOutcome,
    },
    ir::{
        IrReceiver,
        IrTransmitter,
    },
    sound::{
        self,
        NoSound,
        SoundPlayer,
    },
};

/// Device configuration. Durations are cooperative-loop windows in
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// This device's address, tagged onto every shot and used to reject
    /// frames from our own transmitter. Must be unique within a play
    /// session; uniqueness is the operator's responsibility.
    pub address: u16,
    /// Minimum time between shots.
    pub fire_cooloff_ms: u32,
    /// Fire status LED pulse length.
    pub fire_led_ms: u32,
    /// Hit status LED pulse length.
    pub hit_led_ms: u32,
}

impl Config {
    /// Reference-hardware timings: 500 ms fire cooloff, 100 ms fire LED,
    /// 200 ms hit LED.
    #[must_use]
    pub const fn new(address: u16) -> Self {
        Self {
            address,
            fire_cooloff_ms: 500,
            fire_led_ms: 100,
            hit_led_ms: 200,
        }
    }
}

/// What one poll tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollOutcome {
    /// A shot was fired this tick.
    pub fired: bool,
    /// Hit-detector result for this tick.
    pub hit: HitOutcome,
}

/// Complete handheld device state: single owner, single execution context.
///
/// The trigger button, IR transmitter and IR receiver form the minimal
/// useful device. Status LEDs and sound default to no-ops and are attached
/// with the `with_*` builders; an absent component monomorphizes away.
pub struct Device<B, T, R, FL = NoPin, HL = NoPin, S = NoSound> {
    fire: FireControl<B, T>,
    hit: HitDetect<R>,
    health: Health,
    fire_led: StatusLed<FL>,
    hit_led: StatusLed<HL>,
    sound: S,
    config: Config,
}

impl<B: InputPin, T: IrTransmitter, R: IrReceiver> Device<B, T, R> {
    pub fn new(config: Config, button: B, tx: T, rx: R) -> Self {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "irtag: address {=u16}, fire cooloff {=u32} ms",
            config.address,
            config.fire_cooloff_ms,
        );

        Self {
            fire: FireControl::new(button, tx, config.address, config.fire_cooloff_ms),
            hit: HitDetect::new(rx, config.address),
            health: Health::new(),
            fire_led: StatusLed::new(NoPin, config.fire_led_ms),
            hit_led: StatusLed::new(NoPin, config.hit_led_ms),
            sound: NoSound,
            config,
        }
    }
}

impl<B, T, R, FL, HL, S> Device<B, T, R, FL, HL, S> {
    /// Attach the fire status LED (active-low).
    pub fn with_fire_led<P: OutputPin>(self, pin: P) -> Device<B, T, R, P, HL, S> {
        Device {
            fire: self.fire,
            hit: self.hit,
            health: self.health,
            fire_led: StatusLed::new(pin, self.config.fire_led_ms),
            hit_led: self.hit_led,
            sound: self.sound,
            config: self.config,
        }
    }

    /// Attach the hit status LED (active-low).
    pub fn with_hit_led<P: OutputPin>(self, pin: P) -> Device<B, T, R, FL, P, S> {
        Device {
            fire: self.fire,
            hit: self.hit,
            health: self.health,
            fire_led: self.fire_led,
            hit_led: StatusLed::new(pin, self.config.hit_led_ms),
            sound: self.sound,
            config: self.config,
        }
    }

    /// Attach the tone-synthesis collaborator.
    pub fn with_sound<N: SoundPlayer>(self, sound: N) -> Device<B, T, R, FL, HL, N> {
        Device {
            fire: self.fire,
            hit: self.hit,
            health: self.health,
            fire_led: self.fire_led,
            hit_led: self.hit_led,
            sound,
            config: self.config,
        }
    }

    /// Current health. Negative once the device is destroyed.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health.value()
    }

    /// True once health has crossed below zero.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.health.is_destroyed()
    }
}

impl<B, T, R, FL, HL, S> Device<B, T, R, FL, HL, S>
where
    B: InputPin,
    T: IrTransmitter,
    R: IrReceiver,
    FL: OutputPin,
    HL: OutputPin,
    S: SoundPlayer,
{
    /// One cooperative tick. Never blocks; call it from the main loop at the
    /// chosen poll interval, passing a monotonic millisecond timestamp.
    ///
    /// The order within a tick is fixed: fire before hit, LED expiry after
    /// both, sound processing last. Expiry compares a pulse against its own
    /// start time, so a pulse started earlier in the same tick survives the
    /// check.
    pub fn poll(&mut self, now_ms: u32) -> PollOutcome {
        let fired = self.fire.poll(now_ms);
        if fired {
            self.fire_led.start(now_ms);
            self.sound.trigger(&sound::FIRE_CUE);
        }

        let hit = self.hit.poll(now_ms, &mut self.health);
        if let HitOutcome::Hit { destroyed } = hit {
            self.hit_led.start(now_ms);
            self.sound.trigger(if destroyed {
                &sound::DIE_CUE
            } else {
                &sound::HIT_CUE
            });
        }

        self.fire_led.poll(now_ms);
        self.hit_led.poll(now_ms);
        self.sound.process();

        PollOutcome { fired, hit }
    }
}
