use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::framework::SeqWidth;

/// An N-bit wrap-around sequence number.
///
/// The sequence space is asymmetrical: from any value there are 2^(N-1)-1
/// values "greater" and 2^(N-1) values "less", exactly as in the signed
/// interpretation of the same integer. Comparing all 16-bit values against 0:
///
/// ```text
/// unsigned      binary    signed distance
///    32767   == 0x7fff ==   32767
///        1   == 0x0001 ==       1
///        0   == 0x0000 ==       0
///    65535   == 0xffff ==      -1
///    32768   == 0x8000 ==  -32768
/// ```
///
/// RFC 1982 leaves comparison of two values exactly 2^(N-1) apart undefined;
/// here it follows two's complement, so the value 2^(N-1) ahead is "less".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent, bound = "")
)]
pub struct SeqNum<U: SeqWidth>(U);

impl<U: SeqWidth> SeqNum<U> {
    pub fn new(value: U) -> Self {
        Self(value)
    }

    /// Extract the raw unsigned sequence number
    pub fn value(self) -> U {
        self.0
    }

    /// Distance to another sequence number
    ///
    /// Subtracting mod 2^N "rotates" the sequence space so that `self` sits at
    /// zero; the signed reinterpretation of the difference is then the signed
    /// distance. Positive means `other` is ahead of `self`, negative behind.
    pub fn distance(self, other: SeqNum<U>) -> U::Dist {
        self.0.distance_to(other.0)
    }
}

impl<U: SeqWidth> From<U> for SeqNum<U> {
    fn from(value: U) -> Self {
        Self(value)
    }
}

impl<U: SeqWidth> Default for SeqNum<U> {
    fn default() -> Self {
        Self(U::ZERO)
    }
}

impl<U: SeqWidth> Display for SeqNum<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Comparison by the inverse of the distance: if the distance to another
/// sequence number is positive, we are "less than" it.
///
/// This cannot be an [`Ord`]: wrapping breaks transitivity, and at the exact
/// antipodal distance 2^(N-1) the distance is negative in *both* directions,
/// so `x > y` and `y > x` both hold while neither is `<` the other. Callers
/// ordering values that may sit exactly half the range apart must use `<`
/// (which excludes the antipode) or keep fewer than 2^(N-1) values in flight.
impl<U: SeqWidth> PartialOrd for SeqNum<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let d = self.distance(*other);
        if d == U::DIST_ZERO {
            Some(Ordering::Equal)
        } else if d > U::DIST_ZERO {
            Some(Ordering::Less)
        } else {
            Some(Ordering::Greater)
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.distance(*other) > U::DIST_ZERO
    }

    fn le(&self, other: &Self) -> bool {
        self.distance(*other) >= U::DIST_ZERO
    }

    fn gt(&self, other: &Self) -> bool {
        self.distance(*other) < U::DIST_ZERO
    }

    fn ge(&self, other: &Self) -> bool {
        self.distance(*other) <= U::DIST_ZERO
    }
}

/// Wrapping addition
impl<U: SeqWidth> Add<U> for SeqNum<U> {
    type Output = Self;

    fn add(self, rhs: U) -> Self {
        Self(self.0.wrapping_add(rhs))
    }
}

/// Wrapping subtraction
impl<U: SeqWidth> Sub<U> for SeqNum<U> {
    type Output = Self;

    fn sub(self, rhs: U) -> Self {
        Self(self.0.wrapping_sub(rhs))
    }
}

impl<U: SeqWidth> AddAssign<U> for SeqNum<U> {
    fn add_assign(&mut self, rhs: U) {
        self.0 = self.0.wrapping_add(rhs);
    }
}

impl<U: SeqWidth> SubAssign<U> for SeqNum<U> {
    fn sub_assign(&mut self, rhs: U) {
        self.0 = self.0.wrapping_sub(rhs);
    }
}
