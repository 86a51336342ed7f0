use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Sub};

use cfg_if::cfg_if;
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

cfg_if! {
    if #[cfg(feature = "serde")] {
        pub trait SeqData: Copy + Serialize + DeserializeOwned {}
        impl<T: Copy + Serialize + DeserializeOwned> SeqData for T {}
    } else {
        pub trait SeqData: Copy {}
        impl<T: Copy> SeqData for T {}
    }
}

/// Binds an N-bit unsigned sequence number width to its signed distance type
/// and to a wide signed ordinal type with at least one wrap of headroom.
///
/// Every operation is total: arithmetic on the raw value wraps mod 2^N, and
/// distances are the wrapped difference reinterpreted as two's complement.
pub trait SeqWidth: SeqData + Eq + Ord + Hash + Debug + Display {
    /// Signed distance between two sequence numbers, same width as Self.
    /// Covers -2^(N-1) ..= 2^(N-1)-1, so any pair of values has a distance.
    type Dist: SeqData + Eq + Ord + Debug + Display;
    /// Wide signed ordinal accumulator. Must hold many wraps of 2^N; i64
    /// gives u16 sequence numbers ( 2^63 / 2^16 ) wraps of usable range.
    type Wide: SeqData
        + Eq
        + Ord
        + Debug
        + Display
        + Default
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + AddAssign;

    /// One full wrap of the sequence space, 2^N, as a wide value.
    const WRAP: Self::Wide;
    const ZERO: Self;
    const ONE: Self;
    const DIST_ZERO: Self::Dist;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Distance from self to other: `other - self` mod 2^N, reinterpreted as
    /// two's-complement signed. Positive means other is "ahead" of self.
    fn distance_to(self, other: Self) -> Self::Dist;
    /// Zero-extend the raw value into the wide ordinal domain.
    fn widen(self) -> Self::Wide;
    /// Sign-extend a distance into the wide ordinal domain.
    fn widen_dist(dist: Self::Dist) -> Self::Wide;
}

macro_rules! impl_seq_width {
    ($u:ty, $s:ty, $w:ty) => {
        impl SeqWidth for $u {
            type Dist = $s;
            type Wide = $w;

            const WRAP: $w = (<$u>::MAX as $w) + 1;
            const ZERO: $u = 0;
            const ONE: $u = 1;
            const DIST_ZERO: $s = 0;

            fn wrapping_add(self, rhs: $u) -> $u {
                <$u>::wrapping_add(self, rhs)
            }
            fn wrapping_sub(self, rhs: $u) -> $u {
                <$u>::wrapping_sub(self, rhs)
            }
            fn distance_to(self, other: $u) -> $s {
                <$u>::wrapping_sub(other, self) as $s
            }
            fn widen(self) -> $w {
                self as $w
            }
            fn widen_dist(dist: $s) -> $w {
                dist as $w
            }
        }
    };
}

impl_seq_width!(u8, i8, i64);
impl_seq_width!(u16, i16, i64);
impl_seq_width!(u32, i32, i64);
impl_seq_width!(u64, i64, i128);
