use super::*;

#[test]
fn dates_times_and_timestamps() {
    assert_eq!(
        classify_string("2024-01-31"),
        (SemanticType::DateTime, Some(SemanticSubtype::Date))
    );
    assert_eq!(
        classify_string("23:59"),
        (SemanticType::DateTime, Some(SemanticSubtype::Time))
    );
    assert_eq!(
        classify_string("08:15:30.250"),
        (SemanticType::DateTime, Some(SemanticSubtype::Time))
    );
    assert_eq!(
        classify_string("2024-01-31 08:15:30"),
        (SemanticType::DateTime, Some(SemanticSubtype::Timestamp))
    );
    assert_eq!(
        classify_string("2024-01-31T08:15"),
        (SemanticType::DateTime, Some(SemanticSubtype::Timestamp))
    );
}

#[test]
fn out_of_range_parts_are_plain_strings() {
    for text in ["2024-13-01", "2024-01-32", "24:00", "12:60", "2024-1-1", "12:30.5"] {
        assert_eq!(
            classify_string(text),
            (SemanticType::String, None),
            "{text:?}"
        );
    }
}

#[test]
fn small_integers_in_strings() {
    assert_eq!(
        classify_string("255"),
        (SemanticType::String, Some(SemanticSubtype::Int8))
    );
    assert_eq!(
        classify_string("-128"),
        (SemanticType::String, Some(SemanticSubtype::Int8))
    );
    assert_eq!(classify_string("256"), (SemanticType::String, None));
    assert_eq!(classify_string("-129"), (SemanticType::String, None));
    assert_eq!(classify_string("abc"), (SemanticType::String, None));
    assert_eq!(classify_string(""), (SemanticType::String, None));
}

#[test]
fn numbers() {
    assert_eq!(
        classify_number("7"),
        (SemanticType::Number, Some(SemanticSubtype::Int8))
    );
    assert_eq!(classify_number("1000"), (SemanticType::Number, None));
    assert_eq!(classify_number("1.5"), (SemanticType::Number, None));
    assert_eq!(classify_number("0x1F"), (SemanticType::Number, None));
}
