use bitline_bit_buf::{BitReader, BitWriter, Endian};
use bitline_schema::{Error, Field, Kind, Layout, Value};

const PACKED_SAMPLES: [u8; 12] = [
    0xEC, 0xBA, 0xDE, 0x68, 0xAF, 0xD2, 0xC5, 0xC8, 0x65, 0xD3, 0xDF, 0x80,
];

#[test]
fn parse_fields() {
    assert_eq!("u8".parse(), Ok(Field::natural(Kind::U8)));
    assert_eq!(" i32 : 23 ".parse(), Field::new(Kind::I32, 23));
    assert_eq!("bool:1".parse(), Ok(Field::natural(Kind::Bool)));

    assert_eq!("u16:13".parse::<Field>().unwrap().to_string(), "u16:13");
    assert_eq!("u16:16".parse::<Field>().unwrap().to_string(), "u16");
}

#[test]
fn reject_bad_fields() {
    assert!(matches!("u24".parse::<Field>(), Err(Error::UnknownKind(_))));
    assert!(matches!(
        "u8:0".parse::<Field>(),
        Err(Error::InvalidWidth { kind: Kind::U8, .. })
    ));
    assert!(matches!("u8:9".parse::<Field>(), Err(Error::InvalidWidth { .. })));
    assert!(matches!("f32:16".parse::<Field>(), Err(Error::InvalidWidth { .. })));
    assert!(matches!("bool:2".parse::<Field>(), Err(Error::InvalidWidth { .. })));
    assert!(matches!("i8:x".parse::<Field>(), Err(Error::InvalidWidth { .. })));
}

#[test]
fn parse_layouts() {
    let layout: Layout = "i16:14, i32:23, u8".parse().unwrap();

    assert_eq!(layout.len(), 3);
    assert!(!layout.is_empty());
    assert_eq!(layout.bits(), 45);
    assert_eq!(layout.bytes(), 6);
    assert_eq!(layout.to_string(), "i16:14,i32:23,u8");

    assert_eq!("".parse::<Layout>(), Err(Error::EmptyLayout));
    assert_eq!(Layout::new(Vec::new()), Err(Error::EmptyLayout));
    assert!(matches!("u8,,u8".parse::<Layout>(), Err(Error::UnknownKind(_))));
}

#[test]
fn parse_values_per_kind() {
    let field = |s: &str| s.parse::<Field>().unwrap();

    assert_eq!(field("bool").parse_value("true"), Ok(Value::Bool(true)));
    assert_eq!(field("u16:13").parse_value("0x1234"), Ok(Value::Unsigned(0x1234)));
    assert_eq!(field("i8:6").parse_value("-20"), Ok(Value::Signed(-20)));
    assert_eq!(field("f64").parse_value("-2.25"), Ok(Value::Float(-2.25)));
    assert_eq!(field("f32").parse_value("3"), Ok(Value::Float(3.0)));

    assert!(matches!(
        field("u8").parse_value("300"),
        Err(Error::InvalidValue { .. })
    ));
    assert!(matches!(
        field("bool").parse_value("2"),
        Err(Error::InvalidValue { .. })
    ));
    assert!(matches!(
        field("f32").parse_value("pi"),
        Err(Error::InvalidValue { .. })
    ));
}

#[test]
fn encode_records() {
    let layout: Layout = "i16:14,i32:23,u8".parse().unwrap();
    let records = layout
        .parse_records(&["-1234", "123456789", "250", "5678", "-987654321", "126"])
        .unwrap();
    assert_eq!(records.len(), 2);

    let mut buf = [0; 12];
    let mut writer = BitWriter::new(&mut buf, Endian::Big);
    for record in &records {
        layout.encode(&mut writer, record).unwrap();
    }
    assert_eq!(writer.used_data(), &PACKED_SAMPLES);
}

#[test]
fn decode_records() {
    let layout: Layout = "i16:14,i32:23,u8".parse().unwrap();
    let mut reader = BitReader::new(&PACKED_SAMPLES, Endian::Big);

    let records = layout.decode_all(&mut reader).unwrap();
    assert_eq!(
        records,
        [
            [Value::Signed(-1234), Value::Signed(-2_372_331), Value::Unsigned(250)],
            [Value::Signed(5678), Value::Signed(2_201_423), Value::Unsigned(126)],
        ]
    );
    assert_eq!(reader.available_bits(), 6);
}

#[test]
fn full_width_fields_follow_endianness() {
    let layout: Layout = "u16,f32,bool".parse().unwrap();
    let values = layout.parse_values(&["0x1234", "1.5", "true"]).unwrap();

    let mut buf = [0; 7];
    let mut writer = BitWriter::new(&mut buf, Endian::Little);
    layout.encode(&mut writer, &values).unwrap();
    assert_eq!(writer.size_bits(), 49);
    assert_eq!(buf, [0x34, 0x12, 0x00, 0x00, 0xC0, 0x3F, 0x80]);

    let mut reader = BitReader::new(&buf, Endian::Little);
    assert_eq!(layout.decode(&mut reader), Ok(values));
}

#[test]
fn encode_errors() {
    let layout: Layout = "u8,i8".parse().unwrap();

    let mut buf = [0; 1];
    let mut writer = BitWriter::new(&mut buf, Endian::Big);

    assert_eq!(
        layout.encode(&mut writer, &[Value::Unsigned(1)]),
        Err(Error::Arity {
            expected: 2,
            actual: 1
        })
    );
    assert!(matches!(
        layout.encode(&mut writer, &[Value::Signed(1), Value::Signed(1)]),
        Err(Error::TypeMismatch { .. })
    ));
    assert_eq!(
        layout.encode(&mut writer, &[Value::Unsigned(1), Value::Signed(1)]),
        Err(Error::Exhausted(Field::natural(Kind::I8)))
    );

    // The first field was written before running out of space.
    assert!(writer.is_full());
}

#[test]
fn decode_exhaustion() {
    let layout: Layout = "u16,u8:4".parse().unwrap();
    let mut reader = BitReader::new(&[0xAB, 0xCD], Endian::Big);

    assert_eq!(
        layout.decode(&mut reader),
        Err(Error::Exhausted("u8:4".parse().unwrap()))
    );
}

#[test]
fn record_arity() {
    let layout: Layout = "u8,u8,u8".parse().unwrap();

    assert_eq!(
        layout.parse_records(&["1", "2", "3", "4"]),
        Err(Error::Arity {
            expected: 3,
            actual: 4
        })
    );
    assert!(layout.parse_records::<&str>(&[]).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn values_serialize_untagged() {
    let values = [
        Value::Bool(true),
        Value::Unsigned(7),
        Value::Signed(-3),
        Value::Float(0.5),
    ];
    assert_eq!(serde_json::to_string(&values).unwrap(), "[true,7,-3,0.5]");
}
