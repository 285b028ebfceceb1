use rfraw_rust::rfraw_common_rs::frame::core::exceptions::{FrameFieldError, RfRawError};
use rfraw_rust::rfraw_common_rs::frame::core::hex_utils::{
    left_pad, slice_lenient, to_hex, to_hex_byte,
};

#[test]
fn test_to_hex_uppercase_minimal_width() {
    assert_eq!(to_hex(0), "0");
    assert_eq!(to_hex(1), "1");
    assert_eq!(to_hex(15), "F");
    assert_eq!(to_hex(16), "10");
    assert_eq!(to_hex(255), "FF");
    assert_eq!(to_hex(256), "100");
}

#[test]
fn test_padded_hex_is_two_chars_for_all_bytes() {
    // Every byte value renders as exactly 2 uppercase hex chars
    for n in 0..=255u32 {
        let padded = left_pad(&to_hex(n), 2, "0").unwrap();
        assert_eq!(padded.len(), 2, "value {}", n);
        assert!(padded.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }
}

#[test]
fn test_left_pad_rejects_non_single_pad_chars() {
    // Any pad string whose length != 1 is an invalid argument
    for pad in ["", "00", "pad", "  "] {
        let err = left_pad("A", 2, pad).unwrap_err();
        assert!(matches!(
            err,
            RfRawError::Field(FrameFieldError::InvalidPadChar { .. })
        ));
    }
}

#[test]
fn test_left_pad_never_truncates() {
    assert_eq!(left_pad("ABC", 2, "0").unwrap(), "ABC");
    assert_eq!(to_hex_byte(0x100).unwrap(), "100");
}

#[test]
fn test_slice_lenient_out_of_range() {
    let s = "0123456789";
    assert_eq!(slice_lenient(s, 0, 10), s);
    assert_eq!(slice_lenient(s, 8, 12), "89");
    assert_eq!(slice_lenient(s, 10, 14), "");
    assert_eq!(slice_lenient(s, 20, 24), "");
}
