//! Lossless edge tracking for a single binary signal.
//!
//! The producer samples the raw level far more often than the consumer polls,
//! so transitions are counted instead of queued. Each poll delivers at most one
//! edge and deliveries strictly alternate between press and release.

use crate::types::ButtonPhase;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTracker {
    current: bool,
    last_emitted: bool,
    pending_up: u32,
    pending_down: u32,
}

impl TransitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw sample. Must be called for every sample the producer sees.
    pub fn record_level(&mut self, level: bool) {
        if level == self.current {
            return;
        }
        if self.current {
            self.pending_up = self.pending_up.saturating_add(1);
        } else {
            self.pending_down = self.pending_down.saturating_add(1);
        }
        self.current = level;
    }

    /// Take the next edge, if the alternation rule allows one.
    pub fn consume_event(&mut self) -> Option<ButtonPhase> {
        if self.last_emitted && self.pending_up > 0 {
            self.pending_up -= 1;
            self.last_emitted = false;
            Some(ButtonPhase::Released)
        } else if !self.last_emitted && self.pending_down > 0 {
            self.pending_down -= 1;
            self.last_emitted = true;
            Some(ButtonPhase::Pressed)
        } else {
            None
        }
    }

    /// Latest raw level seen by the producer.
    #[inline]
    pub fn current(&self) -> bool {
        self.current
    }

    /// Level of the last edge handed to the consumer.
    #[inline]
    pub fn last_emitted(&self) -> bool {
        self.last_emitted
    }

    /// Number of edges still waiting for delivery.
    #[inline]
    pub fn pending(&self) -> u32 {
        self.pending_up.saturating_add(self.pending_down)
    }
}
