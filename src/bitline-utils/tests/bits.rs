use bitline_utils::bits::*;

#[test]
fn test_mask() {
    assert_eq!(mask(0), 0);
    assert_eq!(mask(1), 1);
    assert_eq!(mask(7), 0x7F);
    assert_eq!(mask(63), u64::MAX >> 1);
    assert_eq!(mask(64), u64::MAX);
    assert_eq!(mask(100), u64::MAX);
}

#[test]
fn test_sign_extend() {
    assert_eq!(sign_extend(0x1A, 6), 26);
    assert_eq!(sign_extend(0x3A, 6), -6);
    assert_eq!(sign_extend(0x2BCDEF, 23), 0x2BCDEF);
    assert_eq!(sign_extend(0x4BCDEF, 23), 0x4BCDEF - (1 << 23));
    assert_eq!(sign_extend(1, 1), -1);
    assert_eq!(sign_extend(u64::MAX, 64), -1);

    // Garbage above the field must not leak into the result.
    assert_eq!(sign_extend(0xFF05, 4), 5);
}

#[test]
fn test_byte_sizing() {
    assert_eq!(bits_to_bytes(0), 0);
    assert_eq!(bits_to_bytes(1), 1);
    assert_eq!(bits_to_bytes(8), 1);
    assert_eq!(bits_to_bytes(9), 2);
    assert_eq!(bits_to_bytes(42), 6);

    assert_eq!(whole_bytes(7), 0);
    assert_eq!(whole_bytes(42), 5);
}
