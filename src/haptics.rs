//! Haptic feedback hooks.
//!
//! The chart never talks to device haptics itself. It hands a [`HapticPulse`]
//! to whatever [`HapticFeedback`] implementation the host installed, once per
//! edge (entering a limit, crossing onto a new segment).

use std::sync::mpsc::{Receiver, Sender};

/// Why a pulse was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticPulse {
    /// The indicator arrived on the left/right limit or exactly on a vertex.
    LimitReached,
    /// The indicator moved onto a different segment while dragging.
    SegmentCrossed,
}

impl std::fmt::Display for HapticPulse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HapticPulse::LimitReached => write!(f, "limit reached"),
            HapticPulse::SegmentCrossed => write!(f, "segment crossed"),
        }
    }
}

/// Receiver of haptic pulse requests.
pub trait HapticFeedback {
    fn pulse(&mut self, pulse: HapticPulse);
}

/// Discards every pulse.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn pulse(&mut self, _pulse: HapticPulse) {}
}

/// Reports pulses through the `log` facade. Handy on desktop where no
/// haptic engine exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHaptics;

impl HapticFeedback for LogHaptics {
    fn pulse(&mut self, pulse: HapticPulse) {
        log::info!("haptic pulse: {pulse}");
    }
}

impl<F: FnMut(HapticPulse)> HapticFeedback for F {
    fn pulse(&mut self, pulse: HapticPulse) {
        self(pulse)
    }
}

/// Forwards pulses over an `mpsc` channel, see [`channel_haptics`].
#[derive(Debug, Clone)]
pub struct ChannelHaptics {
    sender: Sender<HapticPulse>,
}

impl HapticFeedback for ChannelHaptics {
    fn pulse(&mut self, pulse: HapticPulse) {
        // A dropped receiver just means nobody listens anymore.
        if self.sender.send(pulse).is_err() {
            log::trace!("haptic receiver gone, dropping {pulse}");
        }
    }
}

/// Create a channel-backed haptic sink and the receiver the host polls.
pub fn channel_haptics() -> (ChannelHaptics, Receiver<HapticPulse>) {
    let (sender, rx) = std::sync::mpsc::channel();
    (ChannelHaptics { sender }, rx)
}
