use crate::framework::SeqWidth;
use crate::number::SeqNum;

/// Compares whether a < b mod 2^N
///
/// # Arguments
///
/// * `a`: First one
/// * `b`: Second one
///
/// returns: bool
///
/// # Examples
///
/// ```
/// assert!(seqord::util::seqno_less_than(5u16, 10000));
/// assert!(seqord::util::seqno_less_than(60000u16, 61000));
///
/// assert!(!seqord::util::seqno_less_than(20000u16, 61000));
/// ```
pub fn seqno_less_than<U: SeqWidth>(a: U, b: U) -> bool {
    SeqNum::new(a) < SeqNum::new(b)
}

/// Shortcut for increment mod 2^N
///
/// # Examples
///
/// ```
/// let mut x = u16::MAX;
/// seqord::util::increment(&mut x);
/// assert_eq!(x, 0);
/// ```
pub fn increment<U: SeqWidth>(x: &mut U) {
    *x = x.wrapping_add(U::ONE)
}

pub fn increment_by<U: SeqWidth>(x: U, y: U) -> U {
    x.wrapping_add(y)
}
