use bitkit::{BitError, clear_bit, get_bit_status, is_even, is_nth_bit_on, set_bit, toggle_bit};

#[test]
fn set_bit_then_status_is_one() {
    for x in 0..=u8::MAX {
        for p in 0..8 {
            let set = set_bit(x, p).unwrap();

            assert_eq!(get_bit_status(set, p).unwrap(), 1);
            assert_eq!(set & !(1 << p), x & !(1 << p));
        }
    }
}

#[test]
fn clear_bit_then_status_is_zero() {
    for x in 0..=u8::MAX {
        for p in 0..8 {
            let cleared = clear_bit(x, p).unwrap();

            assert_eq!(get_bit_status(cleared, p).unwrap(), 0);
            assert_eq!(cleared | (1 << p), x | (1 << p));
        }
    }
}

#[test]
fn toggle_bit_is_involution() {
    for x in 0..=u8::MAX {
        for p in 0..8 {
            let once = toggle_bit(x, p).unwrap();

            assert_ne!(once, x);
            assert_eq!(toggle_bit(once, p).unwrap(), x);
        }
    }
}

#[test]
fn single_bit_examples() {
    assert_eq!(set_bit(0b0000_0000, 3).unwrap(), 0b0000_1000);
    assert_eq!(clear_bit(0b1111_1111, 7).unwrap(), 0b0111_1111);
    assert_eq!(toggle_bit(0b1010_1010, 0).unwrap(), 0b1010_1011);
    assert_eq!(get_bit_status(0b0100_0000, 6).unwrap(), 1);
    assert_eq!(get_bit_status(0b0100_0000, 5).unwrap(), 0);
}

#[test]
fn position_out_of_range_is_rejected() {
    let err = BitError::PositionOutOfRange {
        position: 8,
        width: 8,
    };

    assert_eq!(set_bit(0, 8), Err(err));
    assert_eq!(clear_bit(0xFF, 8), Err(err));
    assert_eq!(toggle_bit(0, 8), Err(err));
    assert_eq!(get_bit_status(0xFF, 8), Err(err));

    assert_eq!(
        set_bit(0, u8::MAX),
        Err(BitError::PositionOutOfRange {
            position: 255,
            width: 8
        })
    );
}

#[test]
fn is_even_matches_parity() {
    for x in 0..=u8::MAX {
        assert_eq!(is_even(x), x % 2 == 0);
    }
}

#[test]
fn is_nth_bit_on_word() {
    let x = 0x8000_0001u32;

    assert!(is_nth_bit_on(x, 0).unwrap());
    assert!(is_nth_bit_on(x, 31).unwrap());
    assert!(!is_nth_bit_on(x, 1).unwrap());
    assert!(!is_nth_bit_on(x, 30).unwrap());

    for n in 0..32 {
        assert!(is_nth_bit_on(1u32 << n, n as u8).unwrap());
        assert!(!is_nth_bit_on(!(1u32 << n), n as u8).unwrap());
    }
}

#[test]
fn is_nth_bit_on_rejects_index_past_word() {
    assert_eq!(
        is_nth_bit_on(u32::MAX, 32),
        Err(BitError::PositionOutOfRange {
            position: 32,
            width: 32
        })
    );
}

#[test]
fn error_display() {
    let err = set_bit(0, 9).unwrap_err();

    assert_eq!(err.to_string(), "bit position 9 out of range for 8-bit operand");
}
