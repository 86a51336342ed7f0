use seqord::number::SeqNum;

#[test]
fn raw_wrapping_assumptions() {
    // make sure our assumptions about unsigned truncation and wrapping hold
    assert_eq!(12345u16.wrapping_add(1), 12346);
    assert_eq!(65535u16.wrapping_add(1), 0);
    assert_eq!(0u16.wrapping_sub(1), 65535);
    assert_eq!(65535u16.wrapping_add(2), 1);
}

#[test]
fn distance_from_one() {
    let s1 = SeqNum::new(1u16);
    assert_eq!(s1.value(), 1);
    assert_eq!(s1.distance(SeqNum::new(32768)), 32767);
    assert_eq!(s1.distance(SeqNum::new(32767)), 32766);
    assert_eq!(s1.distance(SeqNum::new(1)), 0);
    assert_eq!(s1.distance(SeqNum::new(2)), 1);
    assert_eq!(s1.distance(SeqNum::new(0)), -1);
    assert_eq!(s1.distance(SeqNum::new(65535)), -2);
    assert_eq!(s1.distance(SeqNum::new(32770)), -32767);
    assert_eq!(s1.distance(SeqNum::new(32769)), -32768);
}

#[test]
fn distance_to_self_is_zero() {
    for seq in [0u16, 1, 100, 32767, 32768, 65535] {
        assert_eq!(SeqNum::new(seq).distance(SeqNum::new(seq)), 0);
    }
}

#[test]
fn half_range_edge_cases() {
    // for N-bit sequence numbers there are 2^(N-1) values "less than" and only
    // 2^(N-1)-1 "greater than", just like 2's complement signed arithmetic
    let s_ffff = SeqNum::new(0xFFFFu16);
    let s_0000 = SeqNum::new(0u16);
    let s_0001 = SeqNum::new(1u16);
    let s_7fff = SeqNum::new(0x7FFFu16);
    let s_8000 = SeqNum::new(0x8000u16);
    let s_8001 = SeqNum::new(0x8001u16);

    assert_eq!(s_0000.distance(s_7fff), 32767); // + 2^(N-1)-1, largest "greater than"
    assert_eq!(s_0000.distance(s_8000), -32768); // + 2^(N-1), wrapped! now "less than"
    assert_eq!(s_0000.distance(s_8001), -32767);

    assert_eq!(s_8000.distance(s_ffff), 32767);
    assert_eq!(s_8000.distance(s_0000), -32768);
    assert_eq!(s_8000.distance(s_0001), -32767);

    assert!(s_0000 < s_7fff);
    assert!(!(s_0000 > s_7fff));
    assert!(!(s_0000 < s_8000)); // -32768; wrapped!
    assert!(s_0000 > s_8000);
    assert!(!(s_0000 < s_8001));
    assert!(s_0000 > s_8001);

    assert!(s_8000 < s_ffff);
    assert!(!(s_8000 > s_ffff));
    assert!(!(s_8000 < s_0000));
    assert!(s_8000 > s_0000);
    assert!(!(s_8000 < s_0001));
    assert!(s_8000 > s_0001);

    // the odd antipodal case: 0x0 > 0x8000 AND 0x8000 > 0x0, while neither is
    // < the other, so always using < excludes the value exactly 2^(N-1) away
    assert!(s_0000 > s_8000);
    assert!(s_8000 > s_0000);
    assert!(!(s_0000 < s_8000));
    assert!(!(s_8000 < s_0000));
}

#[test]
fn translation_invariance() {
    // a < b must agree with (a+k) < (b+k) for every shift k
    let vals = [0u16, 1, 2, 100, 32766, 32767, 32768, 40000, 65534, 65535];
    let shifts = [1u16, 2, 100, 10000, 0x7FFF, 0x8000, 0xFFFF];
    for &x in &vals {
        for &y in &vals {
            for &k in &shifts {
                assert_eq!(
                    SeqNum::new(x) < SeqNum::new(y),
                    SeqNum::new(x.wrapping_add(k)) < SeqNum::new(y.wrapping_add(k)),
                    "shift {k} changed the orientation of {x} vs {y}"
                );
            }
        }
    }
}

#[test]
fn less_than_never_holds_both_ways() {
    let vals = [0u16, 1, 1000, 32767, 32768, 32769, 50000, 65535];
    for &x in &vals {
        for &y in &vals {
            let a = SeqNum::new(x);
            let b = SeqNum::new(y);
            assert!(!(a < b && b < a), "{x} and {y} are both less than each other");
            // > holds both ways exactly at the antipodal distance
            assert_eq!(a > b && b > a, a.distance(b) == -32768);
        }
    }
}

#[test]
fn wrapping_operators() {
    let s = SeqNum::new(65535u16);
    assert_eq!((s + 1).value(), 0);
    assert_eq!((s + 2).value(), 1);
    assert_eq!((SeqNum::new(0u16) - 1).value(), 65535);

    let mut m = SeqNum::new(65534u16);
    m += 3;
    assert_eq!(m.value(), 1);
    m -= 2;
    assert_eq!(m.value(), 65535);
}

#[test]
fn narrow_and_wide_widths() {
    // u8: the antipode sits at 0x80
    let z = SeqNum::new(0u8);
    assert_eq!(z.distance(SeqNum::new(0x7F)), 127);
    assert_eq!(z.distance(SeqNum::new(0x80)), -128);
    assert!(z > SeqNum::new(0x80u8));
    assert!(SeqNum::new(0x80u8) > z);

    // u32
    let s = SeqNum::new(1u32);
    assert_eq!(s.distance(SeqNum::new(0)), -1);
    assert_eq!(s.distance(SeqNum::new(0x8000_0000)), 0x7FFF_FFFF);
    assert_eq!(s.distance(SeqNum::new(0x8000_0001)), i32::MIN);

    // u64
    let s = SeqNum::new(u64::MAX);
    assert_eq!(s.distance(SeqNum::new(0)), 1);
    assert_eq!(s.distance(SeqNum::new(u64::MAX - 2)), -2);
}

#[test]
fn util_shortcuts() {
    use seqord::util::{increment, increment_by, seqno_less_than};

    assert!(seqno_less_than(65535u16, 0));
    assert!(!seqno_less_than(0u16, 65535));
    assert!(!seqno_less_than(7u16, 7));

    let mut x = 65534u16;
    increment(&mut x);
    assert_eq!(x, 65535);
    increment(&mut x);
    assert_eq!(x, 0);
    assert_eq!(increment_by(65535u16, 3), 2);
}

#[test]
fn conversions_and_formatting() {
    let s: SeqNum<u16> = 54321.into();
    assert_eq!(s.value(), 54321);
    assert_eq!(format!("{s}"), "54321");
    assert_eq!(SeqNum::<u16>::default().value(), 0);
}
