//! Hit detection: filtering decoded IR frames into health damage.

use crate::{
    health::{
        HIT_DAMAGE,
        Health,
    },
    ir::{
        Frame,
        IrReceiver,
    },
};

/// Why a decoded frame did not count as a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IgnoreReason {
    /// Raw payload was zero: the capture was incomplete or corrupt.
    Incomplete,
    /// The frame carried this device's own address — our own shot picked up
    /// by our receiver, or a reflection of it.
    SelfOrigin,
}

/// Result of one hit-detector tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HitOutcome {
    /// No frame was decoded this tick.
    NoFrame,
    /// A frame was decoded but filtered out. No state changed.
    Ignored(IgnoreReason),
    /// A valid hit; health was decremented.
    Hit {
        /// True when this hit took health below zero.
        destroyed: bool,
    },
}

/// Consumes decoded IR frames and turns them into hits.
pub struct HitDetect<R> {
    rx: R,
    own_address: u16,
    last_hit_ms: Option<u32>,
}

impl<R: IrReceiver> HitDetect<R> {
    pub fn new(rx: R, own_address: u16) -> Self {
        Self {
            rx,
            own_address,
            last_hit_ms: None,
        }
    }

    /// One cooperative tick: attempt a decode and run the filter chain.
    ///
    /// Every validly decoded foreign frame is a hit, regardless of how
    /// recently the previous one landed — there is deliberately no post-hit
    /// debounce window beyond what the receiver itself provides between
    /// decode cycles. The receiver is re-armed after every attempt.
    pub fn poll(&mut self, now_ms: u32, health: &mut Health) -> HitOutcome {
        let decoded = self.rx.try_decode();
        self.rx.resume();

        let Some(frame) = decoded else {
            return HitOutcome::NoFrame;
        };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "hit: decoded {=str} frame, raw {=u32:#x}, address {=u16:#x}, command {=u8:#x}",
            frame.protocol,
            frame.raw,
            frame.address,
            frame.command,
        );

        if frame.raw == 0 {
            #[cfg(feature = "defmt")]
            defmt::info!("hit: ignored, capture incomplete");
            return HitOutcome::Ignored(IgnoreReason::Incomplete);
        }

        if frame.address == self.own_address {
            #[cfg(feature = "defmt")]
            defmt::info!("hit: ignored, frame from own transmitter");
            return HitOutcome::Ignored(IgnoreReason::SelfOrigin);
        }

        self.last_hit_ms = Some(now_ms);
        health.damage(HIT_DAMAGE);

        #[cfg(feature = "defmt")]
        defmt::info!("hit: registered, health {=i32}", health.value());

        HitOutcome::Hit {
            destroyed: health.is_destroyed(),
        }
    }

    /// When the last valid hit landed, if any. Diagnostics only.
    #[must_use]
    pub fn last_hit_ms(&self) -> Option<u32> {
        self.last_hit_ms
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    /// Receiver fed through a shared slot, so tests can inject frames while
    /// the detector owns it. Mirrors the real contract: nothing decodes until
    /// the receiver has been re-armed with `resume`.
    struct FakeRx<'a> {
        slot: &'a Cell<Option<Frame>>,
        armed: bool,
        resumes: &'a Cell<usize>,
    }

    impl<'a> FakeRx<'a> {
        fn new(slot: &'a Cell<Option<Frame>>, resumes: &'a Cell<usize>) -> Self {
            Self {
                slot,
                armed: true,
                resumes,
            }
        }
    }

    impl IrReceiver for FakeRx<'_> {
        fn try_decode(&mut self) -> Option<Frame> {
            if !self.armed {
                return None;
            }
            self.armed = false;
            self.slot.take()
        }

        fn resume(&mut self) {
            self.armed = true;
            self.resumes.set(self.resumes.get() + 1);
        }
    }

    fn frame(raw: u32, address: u16) -> Frame {
        Frame {
            raw,
            address,
            command: 0x1,
            protocol: "Sony",
        }
    }

    #[test]
    fn no_frame_is_a_noop() {
        let slot = Cell::new(None);
        let resumes = Cell::new(0);
        let mut hit = HitDetect::new(FakeRx::new(&slot, &resumes), 1);
        let mut health = Health::new();

        assert_eq!(hit.poll(0, &mut health), HitOutcome::NoFrame);
        assert_eq!(health.value(), 100);
        assert_eq!(hit.last_hit_ms(), None);
    }

    #[test]
    fn incomplete_capture_never_changes_health() {
        let slot = Cell::new(Some(frame(0, 2)));
        let resumes = Cell::new(0);
        let mut hit = HitDetect::new(FakeRx::new(&slot, &resumes), 1);
        let mut health = Health::new();

        assert_eq!(
            hit.poll(0, &mut health),
            HitOutcome::Ignored(IgnoreReason::Incomplete)
        );
        assert_eq!(health.value(), 100);
    }

    #[test]
    fn own_address_never_changes_health() {
        let slot = Cell::new(Some(frame(0xA90, 1)));
        let resumes = Cell::new(0);
        let mut hit = HitDetect::new(FakeRx::new(&slot, &resumes), 1);
        let mut health = Health::new();

        assert_eq!(
            hit.poll(0, &mut health),
            HitOutcome::Ignored(IgnoreReason::SelfOrigin)
        );
        assert_eq!(health.value(), 100);
    }

    #[test]
    fn foreign_frame_costs_fixed_damage() {
        let slot = Cell::new(Some(frame(0xA90, 2)));
        let resumes = Cell::new(0);
        let mut hit = HitDetect::new(FakeRx::new(&slot, &resumes), 1);
        let mut health = Health::new();

        assert_eq!(hit.poll(40, &mut health), HitOutcome::Hit { destroyed: false });
        assert_eq!(health.value(), 70);
        assert_eq!(hit.last_hit_ms(), Some(40));
    }

    #[test]
    fn back_to_back_hits_are_not_debounced() {
        // One hit per decoded frame, unconditionally of timing.
        let slot = Cell::new(Some(frame(0xA90, 2)));
        let resumes = Cell::new(0);
        let mut hit = HitDetect::new(FakeRx::new(&slot, &resumes), 1);
        let mut health = Health::new();

        assert!(matches!(hit.poll(10, &mut health), HitOutcome::Hit { .. }));

        slot.set(Some(frame(0xA90, 2)));
        assert!(matches!(hit.poll(11, &mut health), HitOutcome::Hit { .. }));

        assert_eq!(health.value(), 40);
    }

    #[test]
    fn receiver_is_rearmed_after_every_attempt() {
        let slot = Cell::new(None);
        let resumes = Cell::new(0);
        let mut hit = HitDetect::new(FakeRx::new(&slot, &resumes), 1);
        let mut health = Health::new();

        hit.poll(0, &mut health);
        hit.poll(1, &mut health);
        hit.poll(2, &mut health);
        assert_eq!(resumes.get(), 3);
    }

    #[test]
    fn fourth_hit_reports_destroyed() {
        let slot = Cell::new(None);
        let resumes = Cell::new(0);
        let mut hit = HitDetect::new(FakeRx::new(&slot, &resumes), 1);
        let mut health = Health::new();

        for n in 0..4u32 {
            slot.set(Some(frame(0xA90, 2)));
            let destroyed = n == 3;
            assert_eq!(hit.poll(n, &mut health), HitOutcome::Hit { destroyed });
        }
        assert_eq!(health.value(), -20);
    }
}
