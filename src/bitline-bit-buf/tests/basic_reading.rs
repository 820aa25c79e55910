use bitline_bit_buf::{BitReader, Endian, StreamState};

const FULL_WIDTH_BIG: [u8; 14] = [
    0x5A, 0x12, 0x34, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x56, 0x78, 0xA5,
];

const FULL_WIDTH_LITTLE: [u8; 14] = [
    0x5A, 0x34, 0x12, 0xEF, 0xCD, 0xAB, 0x89, 0x98, 0xBA, 0xDC, 0xFE, 0x78, 0x56, 0xA5,
];

fn read_full_width(buf: &mut BitReader<'_>) {
    assert_eq!(buf.read::<i8>(), Some(0x5A));
    assert_eq!(buf.read::<u16>(), Some(0x1234));
    assert_eq!(buf.read::<u32>(), Some(0x89AB_CDEF));
    assert_eq!(buf.read::<i32>(), Some(0xFEDC_BA98u32 as i32));
    assert_eq!(buf.read::<u16>(), Some(0x5678));
    assert_eq!(buf.read::<u8>(), Some(0xA5));
}

#[test]
fn read_primitives_big_endian() {
    let mut buf = BitReader::new(&FULL_WIDTH_BIG, Endian::Big);

    assert_eq!(buf.size_bits(), 112);
    read_full_width(&mut buf);

    assert!(buf.at_end());
    assert_eq!(buf.state(), StreamState::Exhausted);
    assert_eq!(buf.read::<bool>(), None);
}

#[test]
fn read_primitives_little_endian() {
    let mut buf = BitReader::new(&FULL_WIDTH_LITTLE, Endian::Little);

    read_full_width(&mut buf);
    assert!(buf.at_end());
}

#[test]
fn read_partial_fields() {
    let mut buf = BitReader::new(&[0x6A, 0x46, 0x8A, 0xF3, 0x7B, 0xC0], Endian::Big);

    assert_eq!(buf.read_bits::<i8>(6), Some(0x1A));
    assert_eq!(buf.read_bits::<u16>(13), Some(0x1234));
    assert_eq!(buf.read_bits::<i32>(23), Some(0x2B_CDEF));
    assert_eq!(buf.consumed_bits(), 42);
    assert_eq!(buf.available_bits(), 6);
}

#[test]
fn partial_fields_ignore_endianness() {
    let data = [0x6A, 0x46, 0x8A, 0xF3, 0x7B, 0xC0];
    let mut big = BitReader::new(&data, Endian::Big);
    let mut little = BitReader::new(&data, Endian::Little);

    for nbits in [6, 13, 23] {
        assert_eq!(big.read_bits::<u32>(nbits), little.read_bits::<u32>(nbits));
    }
}

#[test]
fn read_sign_extends_narrow_fields() {
    let mut buf = BitReader::new(&[0x6A, 0x46, 0x8A, 0xF3, 0x7B, 0xC0], Endian::Big);

    assert!(buf.skip(6));
    assert_eq!(buf.read_bits::<i16>(13), Some(-3532));

    // The same bits read unsigned are not extended.
    buf.restart();
    assert!(buf.skip(6));
    assert_eq!(buf.read_bits::<u16>(13), Some(0x1234));
}

#[test]
fn read_bools_msb_first() {
    let mut buf = BitReader::new(&[0x5A], Endian::Big);

    let bits: Vec<bool> = (0..8).map(|_| buf.read::<bool>().unwrap()).collect();
    assert_eq!(
        bits,
        [false, true, false, true, true, false, true, false]
    );
    assert_eq!(buf.read::<bool>(), None);
}

#[test]
fn failed_read_keeps_position() {
    let mut buf = BitReader::new(&[0xFF, 0x00], Endian::Big);

    assert_eq!(buf.read_bits::<u8>(3), Some(0b111));
    assert_eq!(buf.read::<u16>(), None);
    assert_eq!(buf.read_bits::<u32>(14), None);
    assert_eq!(buf.consumed_bits(), 3);

    assert_eq!(buf.read_bits::<u16>(13), Some(0b1_1111_0000_0000));
    assert!(buf.at_end());
}

#[test]
fn read_fixed_widths() {
    let mut buf = BitReader::new(&[0b1011_0110, 0b0100_0000], Endian::Big);

    assert_eq!(buf.read_fixed::<u8, 3>(), Some(0b101));
    assert_eq!(buf.read_fixed::<i8, 4>(), Some(-5));
    assert_eq!(buf.read_fixed::<u16, 3>(), Some(0b001));
    assert_eq!(buf.read_fixed::<u32, 7>(), None);
    assert_eq!(buf.read_fixed_unchecked::<u32, 6>(), 0);
}

#[test]
fn read_unchecked_matches_checked() {
    let mut checked = BitReader::new(&FULL_WIDTH_BIG, Endian::Big);
    let mut unchecked = checked.clone();

    assert_eq!(checked.read::<u8>(), Some(unchecked.read_unchecked::<u8>()));
    assert_eq!(
        checked.read_bits::<u32>(17),
        Some(unchecked.read_bits_unchecked::<u32>(17))
    );
    assert_eq!(checked.consumed_bits(), unchecked.consumed_bits());
}

#[test]
#[should_panic]
fn read_unchecked_past_end_panics() {
    let mut buf = BitReader::new(&[0xAB], Endian::Big);
    let _ = buf.read_unchecked::<u16>();
}

#[test]
#[should_panic]
fn read_bits_rejects_zero_width() {
    let mut buf = BitReader::new(&[0xAB], Endian::Big);
    let _ = buf.read_bits::<u8>(0);
}

#[test]
#[should_panic]
fn read_bits_rejects_oversized_width() {
    let mut buf = BitReader::new(&[0xAB, 0xCD], Endian::Big);
    let _ = buf.read_bits::<u8>(9);
}

#[test]
fn read_floats() {
    let big = [0x3F, 0xC0, 0x00, 0x00, 0xC0, 0x02, 0, 0, 0, 0, 0, 0];
    let mut buf = BitReader::new(&big, Endian::Big);
    assert_eq!(buf.read::<f32>(), Some(1.5));
    assert_eq!(buf.read::<f64>(), Some(-2.25));

    let little = [0x00, 0x00, 0xC0, 0x3F, 0, 0, 0, 0, 0, 0, 0x02, 0xC0];
    let mut buf = BitReader::new(&little, Endian::Little);
    assert_eq!(buf.read::<f32>(), Some(1.5));
    assert_eq!(buf.read::<f64>(), Some(-2.25));
}

#[test]
fn lifecycle_states() {
    let mut buf = BitReader::new(&[0x12, 0x34], Endian::Big);
    assert_eq!(buf.state(), StreamState::Fresh);

    assert_eq!(buf.read_bits::<u8>(1), Some(0));
    assert_eq!(buf.state(), StreamState::InProgress);

    assert!(buf.skip(15));
    assert_eq!(buf.state(), StreamState::Exhausted);

    buf.restart();
    assert_eq!(buf.state(), StreamState::Fresh);

    let empty = BitReader::new(&[], Endian::Big);
    assert_eq!(empty.state(), StreamState::Exhausted);
    assert!(empty.at_end());
}

#[test]
fn availability_queries() {
    let mut buf = BitReader::new(&[0; 5], Endian::Big);

    assert_eq!(buf.available::<u32>(), 1);
    assert_eq!(buf.available::<u8>(), 5);
    assert_eq!(buf.available::<bool>(), 40);
    assert_eq!(buf.available_for(7), 5);

    assert!(buf.skip(9));
    assert_eq!(buf.available::<u32>(), 0);
    assert_eq!(buf.available::<u16>(), 1);
    assert!(!buf.skip(32));
    assert_eq!(buf.available_bits(), 31);
}

#[test]
fn rebind_to_new_data() {
    let first = [0xAA];
    let second = [0x01, 0x02];

    let mut buf = BitReader::new(&first, Endian::Big);
    assert_eq!(buf.read::<u8>(), Some(0xAA));

    buf.set_data(&second);
    assert_eq!(buf.state(), StreamState::Fresh);
    assert_eq!(buf.size_bytes(), 2);
    assert_eq!(buf.read::<u16>(), Some(0x0102));
}
