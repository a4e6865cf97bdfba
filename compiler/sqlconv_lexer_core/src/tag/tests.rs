use super::*;

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Word as u8, 0);
    assert_eq!(RawTag::HexString as u8, 6);
    assert_eq!(RawTag::Symbol as u8, 32);
    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::ByteOrderMark as u8, 116);
    assert_eq!(RawTag::UnterminatedString as u8, 240);
    assert_eq!(RawTag::InteriorNull as u8, 245);
    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

#[test]
fn display_uses_name() {
    assert_eq!(RawTag::QuotedIdent.to_string(), "quoted identifier");
    assert_eq!(RawTag::Eof.to_string(), "end of input");
}
