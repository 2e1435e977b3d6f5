//! ByteBuffer behaviour matrix and Reader/Writer round-trips.

use frame_buffers::{BufferError, ByteBuffer, Reader, Writer};
use proptest::prelude::*;

fn filled(capacity: usize, data: &[u8]) -> ByteBuffer {
    let mut buf = ByteBuffer::with_capacity(capacity);
    buf.append(data).expect("fits");
    buf
}

// ---------------------------------------------------------------------------
// ByteBuffer
// ---------------------------------------------------------------------------

#[test]
fn append_accumulates_partial_reads() {
    let mut buf = ByteBuffer::with_capacity(16);
    buf.append(b"he").unwrap();
    buf.append(b"llo").unwrap();
    buf.append(b"").unwrap();
    assert_eq!(buf.data(), b"hello");
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.remaining(), 11);
}

#[test]
fn append_overflow_is_rejected_without_change() {
    let mut buf = filled(6, b"abcd");
    let err = buf.append(b"xyz").unwrap_err();
    assert_eq!(
        err,
        BufferError::Overflow {
            needed: 3,
            remaining: 2
        }
    );
    assert_eq!(buf.data(), b"abcd");
    buf.append(b"xy").unwrap();
    assert_eq!(buf.data(), b"abcdxy");
}

#[test]
fn merge_appends_occupied_bytes_only() {
    let mut a = filled(8, b"ab");
    let b = filled(32, b"cd");
    a.merge(&b).unwrap();
    assert_eq!(a.data(), b"abcd");

    let big = filled(8, b"12345678");
    assert!(a.merge(&big).is_err());
    assert_eq!(a.data(), b"abcd");
}

#[test]
fn remove_range_matrix() {
    let cases: &[(usize, usize, &[u8])] = &[
        (0, 0, b"abcdef"),
        (0, 2, b"cdef"),
        (2, 2, b"abef"),
        (4, 2, b"abcd"),
        (0, 6, b""),
        (6, 0, b"abcdef"),
    ];
    for &(start, count, expected) in cases {
        let mut buf = filled(8, b"abcdef");
        buf.remove_range(start, count).unwrap();
        assert_eq!(buf.data(), expected, "start={start} count={count}");
    }
}

#[test]
fn remove_range_out_of_bounds_is_noop() {
    let mut buf = filled(8, b"abcdef");
    assert_eq!(
        buf.remove_range(5, 2),
        Err(BufferError::OutOfRange {
            start: 5,
            count: 2,
            len: 6
        })
    );
    assert!(buf.remove_range(7, 0).is_err());
    assert_eq!(buf.data(), b"abcdef");
}

#[test]
fn grow_never_shrinks() {
    let mut buf = filled(8, b"abc");
    buf.grow(4);
    assert_eq!(buf.capacity(), 8);
    buf.grow(8);
    assert_eq!(buf.capacity(), 8);
    buf.grow(32);
    assert_eq!(buf.capacity(), 32);
    assert_eq!(buf.data(), b"abc");
    assert_eq!(buf.remaining(), 29);
}

#[test]
fn clear_then_reuse() {
    let mut buf = filled(4, b"abcd");
    buf.clear();
    buf.append(b"zz").unwrap();
    assert_eq!(buf.data(), b"zz");
}

#[test]
fn from_vec_is_full() {
    let buf = ByteBuffer::from(vec![1, 2, 3]);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.remaining(), 0);
}

// ---------------------------------------------------------------------------
// Reader/Writer
// ---------------------------------------------------------------------------

#[test]
fn writer_reader_roundtrip_matrix() {
    let mut out = [0u8; 64];
    let mut w = Writer::new(&mut out);
    w.u8(0xFF).unwrap();
    w.i8(i8::MIN).unwrap();
    w.bool(true).unwrap();
    w.u16(u16::MAX).unwrap();
    w.i16(-1000).unwrap();
    w.u32(0x0102_0304).unwrap();
    w.i32(i32::MIN).unwrap();
    w.u64(0x1234_5678_90AB_CDEF).unwrap();
    w.i64(-42).unwrap();
    w.f32(3.5).unwrap();
    w.f64(-0.25).unwrap();
    let end = w.x;
    assert_eq!(end, 1 + 1 + 1 + 2 + 2 + 4 + 4 + 8 + 8 + 4 + 8);

    let mut r = Reader::from_slice(&out, 0, end);
    assert_eq!(r.u8().unwrap(), 0xFF);
    assert_eq!(r.i8().unwrap(), i8::MIN);
    assert!(r.bool().unwrap());
    assert_eq!(r.u16().unwrap(), u16::MAX);
    assert_eq!(r.i16().unwrap(), -1000);
    assert_eq!(r.u32().unwrap(), 0x0102_0304);
    assert_eq!(r.i32().unwrap(), i32::MIN);
    assert_eq!(r.u64().unwrap(), 0x1234_5678_90AB_CDEF);
    assert_eq!(r.i64().unwrap(), -42);
    assert_eq!(r.f32().unwrap(), 3.5);
    assert_eq!(r.f64().unwrap(), -0.25);
    assert_eq!(r.size(), 0);
    assert!(r.u8().is_err());
}

#[test]
fn buffer_fed_reader_waits_for_complete_value() {
    let mut buf = ByteBuffer::with_capacity(16);
    buf.append(&[0xEF, 0xCD, 0xAB]).unwrap();
    {
        let mut r = Reader::new(buf.data());
        assert!(matches!(r.u64(), Err(BufferError::EndOfBuffer { .. })));
        assert_eq!(r.x, 0);
    }
    buf.append(&[0x90, 0x78, 0x56, 0x34, 0x12]).unwrap();
    let mut r = Reader::new(buf.data());
    assert_eq!(r.u64().unwrap(), 0x1234_5678_90AB_CDEF);
    let consumed = r.x;
    buf.remove_range(0, consumed).unwrap();
    assert!(buf.is_empty());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_append_rejection_preserves_state(
        initial in proptest::collection::vec(any::<u8>(), 0..32),
        extra in proptest::collection::vec(any::<u8>(), 0..64),
        slack in 0usize..8,
    ) {
        let capacity = initial.len() + slack;
        let mut buf = filled(capacity, &initial);
        let result = buf.append(&extra);
        if extra.len() > slack {
            prop_assert!(result.is_err());
            prop_assert_eq!(buf.data(), &initial[..]);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(&buf.data()[..initial.len()], &initial[..]);
            prop_assert_eq!(&buf.data()[initial.len()..], &extra[..]);
        }
        prop_assert!(buf.len() <= buf.capacity());
    }

    #[test]
    fn prop_grow_preserves_data(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        slack in 0usize..16,
        new_capacity in 0usize..160,
    ) {
        let capacity = data.len() + slack;
        let mut buf = filled(capacity, &data);
        buf.grow(new_capacity);
        prop_assert_eq!(buf.capacity(), capacity.max(new_capacity));
        prop_assert_eq!(buf.data(), &data[..]);
    }

    #[test]
    fn prop_remove_range_excises(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        a in 0usize..64,
        b in 0usize..64,
    ) {
        let mut buf = filled(data.len(), &data);
        let start = a.min(data.len());
        let count = b.min(data.len() - start);
        buf.remove_range(start, count).unwrap();
        let mut expected = data.clone();
        expected.drain(start..start + count);
        prop_assert_eq!(buf.data(), &expected[..]);
        prop_assert_eq!(buf.len(), data.len() - count);
    }
}
