//! Semantic classification of literal tokens.
//!
//! Type-mapping rules want to know whether `'2024-01-31'` is a date or just
//! text, and whether a number fits in a tiny integer column. The checks are
//! purely lexical: shape and range, no calendar arithmetic.

use sqlconv_ir::{SemanticSubtype, SemanticType};

/// Classification of a string literal's content.
pub(crate) fn classify_string(body: &str) -> (SemanticType, Option<SemanticSubtype>) {
    if let Some(subtype) = datetime_subtype(body) {
        return (SemanticType::DateTime, Some(subtype));
    }
    let subtype = is_int8(body).then_some(SemanticSubtype::Int8);
    (SemanticType::String, subtype)
}

/// Classification of a number token.
pub(crate) fn classify_number(text: &str) -> (SemanticType, Option<SemanticSubtype>) {
    let subtype = is_int8(text).then_some(SemanticSubtype::Int8);
    (SemanticType::Number, subtype)
}

/// Integer within `-128..=255`, the union of signed and unsigned bytes.
fn is_int8(text: &str) -> bool {
    let digits = text
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    text.parse::<i64>()
        .is_ok_and(|value| (-128..=255).contains(&value))
}

fn datetime_subtype(text: &str) -> Option<SemanticSubtype> {
    if is_date(text) {
        return Some(SemanticSubtype::Date);
    }
    if is_time(text) {
        return Some(SemanticSubtype::Time);
    }
    // `YYYY-MM-DD HH:MM[:SS[.fff]]`, with a space or `T` between.
    let (date, time) = (text.get(..10)?, text.get(11..)?);
    let sep = *text.as_bytes().get(10)?;
    (matches!(sep, b' ' | b'T') && is_date(date) && is_time(time))
        .then_some(SemanticSubtype::Timestamp)
}

/// Parse exactly `width` ASCII digits.
fn number(text: &str, width: usize) -> Option<u32> {
    (text.len() == width && text.bytes().all(|b| b.is_ascii_digit()))
        .then(|| text.parse().ok())
        .flatten()
}

/// `YYYY-MM-DD`
fn is_date(text: &str) -> bool {
    let mut parts = text.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    number(y, 4).is_some()
        && number(m, 2).is_some_and(|m| (1..=12).contains(&m))
        && number(d, 2).is_some_and(|d| (1..=31).contains(&d))
}

/// `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`
fn is_time(text: &str) -> bool {
    let (clock, fraction) = match text.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (text, None),
    };
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    let mut parts = clock.split(':');
    let (Some(h), Some(m), s, None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if fraction.is_some() && s.is_none() {
        return false;
    }
    number(h, 2).is_some_and(|h| h < 24)
        && number(m, 2).is_some_and(|m| m < 60)
        && s.map_or(true, |s| number(s, 2).is_some_and(|s| s < 60))
}

#[cfg(test)]
mod tests;
