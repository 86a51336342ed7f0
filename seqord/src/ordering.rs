use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::framework::SeqWidth;
use crate::number::SeqNum;

/// A total ordering over wrap-around sequence numbers.
///
/// Maps a stream of N-bit sequence numbers onto a wide signed ordinal that
/// never goes backwards, by accumulating one full wrap of 2^N into `base`
/// every time the sequence numbers cycle. With u16 sequence numbers on an i64
/// ordinal there is room for 2^63 / 2^16 wraps; wrapping once per second,
/// that maintains order for about 4.4 million years.
///
/// A `SeqOrdering` should only be used to place values that are all within
/// one wrap of each other at any given time; a raw value more than 2^(N-1)
/// from the point it was really meant to be near is silently taken at its
/// nearest interpretation. That is a property of bounded sequence numbers,
/// not a recoverable error.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct SeqOrdering<U: SeqWidth> {
    /// accumulated wrap offset for total ordering, conventionally a multiple of 2^N
    base: U::Wide,
    /// the most recently assigned sequence number
    last: SeqNum<U>,
}

impl<U: SeqWidth> SeqOrdering<U> {
    pub fn new(seq: U) -> Self {
        Self::with_base(seq, Default::default())
    }

    /// Seed `base` directly, e.g. when resuming mid-stream at a known epoch.
    pub fn with_base(seq: U, base: U::Wide) -> Self {
        Self {
            base,
            last: SeqNum::new(seq),
        }
    }

    // region Accessors

    /// The raw sequence number most recently assigned
    pub fn raw(&self) -> U {
        self.last.value()
    }

    pub fn seq(&self) -> SeqNum<U> {
        self.last
    }

    pub fn base(&self) -> U::Wide {
        self.base
    }

    /// The current position on the total order
    pub fn ordinal(&self) -> U::Wide {
        self.base + self.last.value().widen()
    }

    // endregion

    /// Total order of the given sequence number, relative to the current one.
    ///
    /// A pure nearest-point projection: decides which side `seq` is on — is it
    /// within 2^(N-1) below, or within 2^(N-1)-1 above the current sequence
    /// number — and offsets the current ordinal by that distance. Does not
    /// mutate, and never forces forward motion. May be less than `ordinal()`,
    /// and may even be negative if `base` is small; the result is still valid
    /// when compared against other ordinals from the same stream.
    pub fn order(&self, seq: U) -> U::Wide {
        self.ordinal() + U::widen_dist(self.last.distance(SeqNum::new(seq)))
    }

    /// Assign the next sequence number, maintaining the total order.
    ///
    /// The total order is not allowed to go backwards: if `seq` projects
    /// behind the current ordinal, numbering is assumed to have wrapped (or
    /// broken), and `base` advances by one full wrap of 2^N so that the new
    /// ordinal still moves forward. The same `base` adjustment applies when
    /// `seq` is in order but has wrapped in raw terms.
    ///
    /// Returns the new ordinal: unchanged when `seq == raw()`, strictly
    /// greater otherwise.
    pub fn assign(&mut self, seq: U) -> U::Wide {
        let curord = self.ordinal();
        let seqord = self.order(seq);

        if seqord < curord {
            // out of order; force the total order to advance
            warn!(
                "sequence number {} is behind {}, wrapping the total order forward",
                seq, self.last
            );
            self.base += U::WRAP;
        } else if seq < self.last.value() {
            // in order, but the raw sequence number has wrapped
            self.base += U::WRAP;
        }
        self.last = SeqNum::new(seq);
        self.ordinal()
    }

    /// Advance to the next sequence number; equivalent to `assign(raw() + 1)`.
    /// Returns the new ordinal (read `ordinal()` first for the old one).
    pub fn increment(&mut self) -> U::Wide {
        let next = self.last.value().wrapping_add(U::ONE);
        if next == U::ZERO {
            self.base += U::WRAP;
        }
        self.last = SeqNum::new(next);
        self.ordinal()
    }

    /// Monotonic order of the given sequence number.
    ///
    /// Like [`order`](Self::order), but the result always lands on or ahead
    /// of the current ordinal: a sequence number that projects behind is
    /// considered out of order and wrapped into the next 2^N range (more than
    /// one wrap "greater" rather than less than half a wrap "less").
    pub fn monotonic(&self, seq: U) -> U::Wide {
        let seqord = self.order(seq);
        if seqord < self.ordinal() {
            seqord + U::WRAP
        } else {
            seqord
        }
    }

    /// How far ahead of the current ordinal the given sequence number lands,
    /// in monotonic terms. Never negative.
    pub fn monotonic_distance(&self, seq: U) -> U::Wide {
        self.monotonic(seq) - self.ordinal()
    }
}

impl<U: SeqWidth> Default for SeqOrdering<U> {
    fn default() -> Self {
        Self::new(U::ZERO)
    }
}

// region Comparisons

/// Equality against a raw sequence number compares in the N-bit space.
impl<U: SeqWidth> PartialEq<U> for SeqOrdering<U> {
    fn eq(&self, other: &U) -> bool {
        self.last.value() == *other
    }
}

/// Comparison against a raw sequence number uses the total order of that
/// sequence number as projected by [`order`](SeqOrdering::order).
impl<U: SeqWidth> PartialOrd<U> for SeqOrdering<U> {
    fn partial_cmp(&self, other: &U) -> Option<Ordering> {
        Some(self.ordinal().cmp(&self.order(*other)))
    }
}

/// Between two orderings, compare by ordinal (meaningful when both grew from
/// the same base); this is what makes `SeqOrdering` usable in sorted
/// collections.
impl<U: SeqWidth> PartialEq for SeqOrdering<U> {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal() == other.ordinal()
    }
}

impl<U: SeqWidth> Eq for SeqOrdering<U> {}

impl<U: SeqWidth> PartialOrd for SeqOrdering<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: SeqWidth> Ord for SeqOrdering<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

// endregion

impl<U: SeqWidth> Display for SeqOrdering<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>10} (base: {:>8}, seq: {:>5})",
            self.ordinal(),
            self.base,
            self.last.value()
        )
    }
}
