#![no_std]

//! Shift-register debouncing for a single digital input.
//!
//! Every [`DebounceTracker::sample`] shifts one pin reading into an 8-bit
//! history, newest reading in the least significant bit. An edge is reported
//! when that history matches one of two fixed patterns, read oldest first:
//! a rising edge is two lows followed by six highs, a falling edge is six
//! highs followed by two lows. A rising edge therefore waits for six
//! confirming highs while a falling edge fires on the second low.
//!
//! The tracker has no opinion on timing; call it from a timer tick or a main
//! loop at whatever rate suits the switch.

use embedded_hal::digital::v2::InputPin;

/// Two lows followed by six highs.
pub const RISING_EDGE_PATTERN: u8 = 0b0011_1111;
/// Six highs followed by two lows.
pub const FALLING_EDGE_PATTERN: u8 = 0b1111_1100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

#[derive(Debug)]
pub struct DebounceTracker<P> {
    pin: P,
    history: u8,
}

impl<P> DebounceTracker<P> {
    pub fn new(pin: P) -> DebounceTracker<P> {
        DebounceTracker { pin, history: 0 }
    }

    /// Shifts an externally read level into the history and returns the new
    /// history. `sample` goes through here as well.
    pub fn push(&mut self, level: bool) -> u8 {
        self.history = (self.history << 1) | if level { 1 } else { 0 };

        match self.edge() {
            Some(Edge::Rising) => log::trace!("rising edge {:#010b}", self.history),
            Some(Edge::Falling) => log::trace!("falling edge {:#010b}", self.history),
            None => {}
        }

        self.history
    }

    pub fn history(&self) -> u8 {
        self.history
    }

    pub fn is_rising_edge(&self) -> bool {
        self.history == RISING_EDGE_PATTERN
    }

    pub fn is_falling_edge(&self) -> bool {
        self.history == FALLING_EDGE_PATTERN
    }

    pub fn edge(&self) -> Option<Edge> {
        match self.history {
            RISING_EDGE_PATTERN => Some(Edge::Rising),
            FALLING_EDGE_PATTERN => Some(Edge::Falling),
            _ => None,
        }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P, E> DebounceTracker<P>
where
    P: InputPin<Error = E>,
{
    /// Reads the pin once and shifts the reading into the history.
    ///
    /// A failed read leaves the history untouched.
    pub fn sample(&mut self) -> Result<u8, E> {
        let level = self.pin.is_high()?;
        Ok(self.push(level))
    }

    /// Same as [`sample`](Self::sample) for callers that only look at the
    /// edge predicates.
    pub fn refresh(&mut self) -> Result<(), E> {
        self.sample()?;
        Ok(())
    }
}
