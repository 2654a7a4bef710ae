//! Contract for the external tone-synthesis engine.

/// A parameterized descending-note sound effect.
///
/// Pitches are in the synthesis engine's own note units; times are in
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cue {
    pub pitch_lo: u8,
    pub pitch_hi: u8,
    pub pitch_step: u8,
    pub note_ms: u16,
    pub attack_ms: u16,
    pub decay_ms: u16,
}

/// Played when the device fires.
pub const FIRE_CUE: Cue = Cue {
    pitch_lo: 30,
    pitch_hi: 60,
    pitch_step: 5,
    note_ms: 300,
    attack_ms: 240,
    decay_ms: 50,
};

/// Played when the device takes a hit and still has health left.
pub const HIT_CUE: Cue = Cue {
    pitch_lo: 30,
    pitch_hi: 60,
    pitch_step: 10,
    note_ms: 150,
    attack_ms: 50,
    decay_ms: 50,
};

/// Played when a hit takes health below zero.
pub const DIE_CUE: Cue = Cue {
    pitch_lo: 50,
    pitch_hi: 100,
    pitch_step: 30,
    note_ms: 360,
    attack_ms: 0,
    decay_ms: 120,
};

/// Tone-synthesis collaborator.
pub trait SoundPlayer {
    /// Enqueue a cue. Fire-and-forget; once triggered it cannot be aborted
    /// from here.
    fn trigger(&mut self, cue: &Cue);

    /// Advance waveform generation. Must be polled every tick, whether or
    /// not a cue was just triggered.
    fn process(&mut self);
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for &mut T {
    fn trigger(&mut self, cue: &Cue) {
        T::trigger(self, cue);
    }

    fn process(&mut self) {
        T::process(self);
    }
}

/// No-op player for devices without a speaker.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSound;

impl SoundPlayer for NoSound {
    fn trigger(&mut self, _cue: &Cue) {}

    fn process(&mut self) {}
}
