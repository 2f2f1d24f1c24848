//! Scroll-linked and viewport-triggered decoration.
//!
//! Everything here is plain data so it can be driven by browser observers on
//! the client and exercised directly in tests.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Linear map from an input range onto an output range, clamped at the
/// input edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTransform {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

/// Background parallax: scroll 0..500 moves the layer 0..200px.
pub const PARALLAX: LinearTransform = LinearTransform {
    input: (0.0, 500.0),
    output: (0.0, 200.0),
};

/// Background fade: fully visible at the top, gone after 300px.
pub const FADE_OUT: LinearTransform = LinearTransform {
    input: (0.0, 300.0),
    output: (1.0, 0.0),
};

impl LinearTransform {
    pub fn apply(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        let span = in_end - in_start;
        if span == 0.0 || value.is_nan() {
            return out_start;
        }
        let progress = ((value - in_start) / span).clamp(0.0, 1.0);
        out_start + progress * (out_end - out_start)
    }
}

pub fn parallax_style(offset: f64, opacity: f64) -> String {
    format!("transform: translateY({offset:.1}px); opacity: {opacity:.3};")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type ScrollCallback = Arc<dyn Fn(f64) + Send + Sync>;

#[derive(Default)]
struct PublisherState {
    offset: f64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, ScrollCallback)>,
}

/// Fans the vertical scroll offset out to subscribers.
///
/// Cloning gives another handle onto the same publisher.
#[derive(Clone, Default)]
pub struct ScrollPublisher {
    state: Arc<Mutex<PublisherState>>,
}

impl std::fmt::Debug for ScrollPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ScrollPublisher")
            .field("offset", &state.offset)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

impl ScrollPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        state.subscribers.push((id, Arc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let before = state.subscribers.len();
        state.subscribers.retain(|(sub_id, _)| *sub_id != id);
        state.subscribers.len() != before
    }

    /// Records the offset and notifies every subscriber in subscription order.
    pub fn publish(&self, offset: f64) {
        let offset = if offset.is_finite() && offset > 0.0 {
            offset
        } else {
            0.0
        };
        // callbacks run unlocked so they may subscribe or unsubscribe
        let callbacks = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.offset = offset;
            state
                .subscribers
                .iter()
                .map(|(_, cb)| Arc::clone(cb))
                .collect::<Vec<_>>()
        };
        for cb in callbacks {
            cb(offset);
        }
    }

    pub fn offset(&self) -> f64 {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .offset
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .len()
    }
}

pub const REVEAL_OFFSET_PX: f64 = 20.0;
pub const REVEAL_DURATION: Duration = Duration::from_millis(500);
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);
/// Hover colour changes on revealed cards.
pub const HOVER_DURATION: Duration = Duration::from_millis(300);

/// Latch for entrance animations: trips on the first intersection and stays
/// tripped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    /// Returns true only for the observation that reveals the element.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    #[cfg(test)]
    fn is_revealed(&self) -> bool {
        self.revealed
    }
}

pub fn stagger_delay(index: usize) -> Duration {
    let steps = u32::try_from(index).unwrap_or(u32::MAX);
    REVEAL_STAGGER.saturating_mul(steps)
}

pub fn reveal_style(index: usize, revealed: bool) -> String {
    let (offset, opacity) = if revealed {
        (0.0, 1)
    } else {
        (REVEAL_OFFSET_PX, 0)
    };
    let duration = REVEAL_DURATION.as_millis();
    let delay = stagger_delay(index).as_millis();
    let hover = HOVER_DURATION.as_millis();
    // the inline shorthand replaces any class transition, so colours go here too
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms, \
         background-color {hover}ms, border-color {hover}ms;"
    )
}
