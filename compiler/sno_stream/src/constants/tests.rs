use super::*;
use pretty_assertions::assert_eq;

// === Markers ===

#[test]
fn column_one_markers() {
    assert_eq!(COMMENT_CHAR, '*');
    assert_eq!(CONTINUE_CHAR, '.');
    assert_eq!(CONTROL_WORD_CHAR, '-');
}

#[test]
fn whitespace_is_blank_and_tab_only() {
    assert!(is_whitespace(' '));
    assert!(is_whitespace('\t'));
    assert!(!is_whitespace('\n'));
    assert!(!is_whitespace('\r'));
    assert!(!is_whitespace('x'));
    assert!(is_whitespace(BLANK_CHAR));
}

// === char_code ===

#[test]
fn char_code_maps_eof_to_minus_one() {
    assert_eq!(char_code(None), EOF_CHAR);
    assert_eq!(char_code(None), -1);
}

#[test]
fn char_code_maps_chars_to_scalar_values() {
    assert_eq!(char_code(Some('A')), 65);
    assert_eq!(char_code(Some(EOL_CHAR)), 10);
    assert_eq!(char_code(Some('\u{10FFFF}')), 0x10_FFFF);
}

// === StreamId ===

#[test]
fn stream_id_discriminants() {
    assert_eq!(StreamId::Null.code(), -1);
    assert_eq!(StreamId::Stdin.code(), 0);
    assert_eq!(StreamId::Stdout.code(), 1);
    assert_eq!(StreamId::Stderr.code(), 2);
}

#[test]
fn stream_id_from_code() {
    for id in [
        StreamId::Null,
        StreamId::Stdin,
        StreamId::Stdout,
        StreamId::Stderr,
    ] {
        assert_eq!(StreamId::try_from(i32::from(id)), Ok(id));
    }
}

#[test]
fn stream_id_rejects_unknown_code() {
    assert_eq!(
        StreamId::try_from(3),
        Err(ConstantError::UnknownStreamId(3))
    );
    assert_eq!(
        ConstantError::UnknownStreamId(-7).to_string(),
        "unknown predefined stream id -7"
    );
}

#[test]
fn sizes_and_addresses() {
    assert_eq!(DEFAULT_STACK_SIZE, 128);
    assert_eq!(INITIAL_CODE_SIZE, 1024);
    assert_eq!(NO_ADDRESS, -1);
    assert_eq!(ZERO, 0);
    assert!(NULL_STRING.is_empty());
}
