use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan_with(source: &str, config: LexerConfig) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::with_config(buf.cursor(), config);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

fn scan(source: &str) -> Vec<RawToken> {
    scan_with(source, LexerConfig::default())
}

/// Helper: scan and return `(tag, text)` pairs.
fn scan_text_with<'s>(source: &'s str, config: LexerConfig) -> Vec<(RawTag, &'s str)> {
    let mut pos = 0usize;
    scan_with(source, config)
        .into_iter()
        .map(|tok| {
            let end = pos + tok.len as usize;
            let text = &source[pos..end];
            pos = end;
            (tok.tag, text)
        })
        .collect()
}

fn scan_text(source: &str) -> Vec<(RawTag, &str)> {
    scan_text_with(source, LexerConfig::default())
}

// ─── Coverage ──────────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "SELECT  1  FROM dual",
        "select 'it''s', \"Col\", [My Table] from t -- done\r\n",
        "/* open comment",
        "'open string",
        "1.5e-3 .5 0x1F N'x' X'0F'",
        "\u{FEFF}select ü from ñ;",
        "a\0b",
    ];
    for source in sources {
        let tokens = scan(source);
        let total_len: u32 = tokens.iter().map(|t| t.len).sum();
        assert_eq!(
            total_len as usize,
            source.len(),
            "total token length mismatch for {source:?}",
        );
    }
}

#[test]
fn every_token_has_positive_length() {
    for source in ["select * from t", "  \t\n\r\n\r", "'a' \"b\" [c]", "-- x\n/* y */"] {
        for tok in scan(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn eof_is_sticky() {
    let buf = SourceBuffer::new("x");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Word);
    for _ in 0..3 {
        assert_eq!(
            scanner.next_token(),
            RawToken {
                tag: RawTag::Eof,
                len: 0
            }
        );
    }
}

// ─── Whitespace ────────────────────────────────────────────────

#[test]
fn whitespace_runs_are_one_token() {
    assert_eq!(
        scan_text("SELECT  1  FROM dual"),
        vec![
            (RawTag::Word, "SELECT"),
            (RawTag::Whitespace, "  "),
            (RawTag::Number, "1"),
            (RawTag::Whitespace, "  "),
            (RawTag::Word, "FROM"),
            (RawTag::Whitespace, " "),
            (RawTag::Word, "dual"),
        ]
    );
}

#[test]
fn each_line_break_is_its_own_token() {
    assert_eq!(
        scan_text("a\n\r\n\rb"),
        vec![
            (RawTag::Word, "a"),
            (RawTag::Newline, "\n"),
            (RawTag::Newline, "\r\n"),
            (RawTag::Newline, "\r"),
            (RawTag::Word, "b"),
        ]
    );
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn line_comment_excludes_line_break() {
    assert_eq!(
        scan_text("-- hi\r\nx"),
        vec![
            (RawTag::LineComment, "-- hi"),
            (RawTag::Newline, "\r\n"),
            (RawTag::Word, "x"),
        ]
    );
}

#[test]
fn minus_and_slash_are_symbols() {
    assert_eq!(
        scan_text("a-b/c"),
        vec![
            (RawTag::Word, "a"),
            (RawTag::Symbol, "-"),
            (RawTag::Word, "b"),
            (RawTag::Symbol, "/"),
            (RawTag::Word, "c"),
        ]
    );
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        scan_text("/* a\n * b */x"),
        vec![(RawTag::BlockComment, "/* a\n * b */"), (RawTag::Word, "x")]
    );
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    assert_eq!(
        scan_text("x /* never closed"),
        vec![
            (RawTag::Word, "x"),
            (RawTag::Whitespace, " "),
            (RawTag::UnterminatedBlockComment, "/* never closed"),
        ]
    );
}

#[test]
fn nested_comments_only_when_enabled() {
    let source = "/* a /* b */ c */";
    assert_eq!(
        scan_text_with(source, LexerConfig::postgres()),
        vec![(RawTag::BlockComment, source)]
    );
    assert_eq!(
        scan_text(source)[0],
        (RawTag::BlockComment, "/* a /* b */")
    );
}

#[test]
fn hash_comment_only_when_enabled() {
    assert_eq!(
        scan_text_with("# note\n", LexerConfig::mysql()),
        vec![(RawTag::LineComment, "# note"), (RawTag::Newline, "\n")]
    );
    assert_eq!(scan_text("#tmp")[0], (RawTag::Symbol, "#"));
}

// ─── Strings & quoted identifiers ──────────────────────────────

#[test]
fn doubled_quote_stays_inside_string() {
    assert_eq!(
        scan_text("'it''s' x"),
        vec![
            (RawTag::String, "'it''s'"),
            (RawTag::Whitespace, " "),
            (RawTag::Word, "x"),
        ]
    );
}

#[test]
fn backslash_is_literal_by_default() {
    assert_eq!(
        scan_text(r"'C:\' x"),
        vec![
            (RawTag::String, r"'C:\'"),
            (RawTag::Whitespace, " "),
            (RawTag::Word, "x"),
        ]
    );
}

#[test]
fn backslash_escapes_quote_when_enabled() {
    assert_eq!(
        scan_text_with(r"'a\'b' x", LexerConfig::mysql()),
        vec![
            (RawTag::String, r"'a\'b'"),
            (RawTag::Whitespace, " "),
            (RawTag::Word, "x"),
        ]
    );
}

#[test]
fn unterminated_string_runs_to_eof() {
    assert_eq!(
        scan_text("x = 'abc"),
        vec![
            (RawTag::Word, "x"),
            (RawTag::Whitespace, " "),
            (RawTag::Symbol, "="),
            (RawTag::Whitespace, " "),
            (RawTag::UnterminatedString, "'abc"),
        ]
    );
}

#[test]
fn quoted_identifier_styles() {
    assert_eq!(
        scan_text("\"My Col\" [a]]b] `c`"),
        vec![
            (RawTag::QuotedIdent, "\"My Col\""),
            (RawTag::Whitespace, " "),
            (RawTag::QuotedIdent, "[a]]b]"),
            (RawTag::Whitespace, " "),
            (RawTag::QuotedIdent, "`c`"),
        ]
    );
}

#[test]
fn unterminated_quoted_identifier() {
    assert_eq!(
        scan_text("[open"),
        vec![(RawTag::UnterminatedQuotedIdent, "[open")]
    );
}

#[test]
fn prefixed_strings() {
    assert_eq!(
        scan_text("N'ab' x'0F' name"),
        vec![
            (RawTag::NationalString, "N'ab'"),
            (RawTag::Whitespace, " "),
            (RawTag::HexString, "x'0F'"),
            (RawTag::Whitespace, " "),
            (RawTag::Word, "name"),
        ]
    );
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn number_forms() {
    assert_eq!(
        scan_text("12 1.5 1. .5 1e10 2.5E-3 0x1f"),
        vec![
            (RawTag::Number, "12"),
            (RawTag::Whitespace, " "),
            (RawTag::Number, "1.5"),
            (RawTag::Whitespace, " "),
            (RawTag::Number, "1."),
            (RawTag::Whitespace, " "),
            (RawTag::Number, ".5"),
            (RawTag::Whitespace, " "),
            (RawTag::Number, "1e10"),
            (RawTag::Whitespace, " "),
            (RawTag::Number, "2.5E-3"),
            (RawTag::Whitespace, " "),
            (RawTag::HexNumber, "0x1f"),
        ]
    );
}

#[test]
fn exponent_needs_digits() {
    assert_eq!(
        scan_text("1e"),
        vec![(RawTag::Number, "1"), (RawTag::Word, "e")]
    );
    assert_eq!(
        scan_text("1e+"),
        vec![
            (RawTag::Number, "1"),
            (RawTag::Word, "e"),
            (RawTag::Symbol, "+"),
        ]
    );
}

#[test]
fn lone_dot_is_symbol() {
    assert_eq!(
        scan_text("s.t"),
        vec![
            (RawTag::Word, "s"),
            (RawTag::Symbol, "."),
            (RawTag::Word, "t"),
        ]
    );
}

// ─── Words & symbols ───────────────────────────────────────────

#[test]
fn word_continuation_characters() {
    assert_eq!(
        scan_text("a_1$b#c"),
        vec![(RawTag::Word, "a_1$b#c")]
    );
}

#[test]
fn unicode_letters_form_words() {
    assert_eq!(
        scan_text("ñame €"),
        vec![
            (RawTag::Word, "ñame"),
            (RawTag::Whitespace, " "),
            (RawTag::Symbol, "€"),
        ]
    );
}

#[test]
fn byte_order_mark_only_at_start() {
    assert_eq!(
        scan_text("\u{FEFF}x\u{FEFF}"),
        vec![
            (RawTag::ByteOrderMark, "\u{FEFF}"),
            (RawTag::Word, "x"),
            (RawTag::Symbol, "\u{FEFF}"),
        ]
    );
}

#[test]
fn interior_null_is_a_token() {
    assert_eq!(
        scan_text("a\0b"),
        vec![
            (RawTag::Word, "a"),
            (RawTag::InteriorNull, "\0"),
            (RawTag::Word, "b"),
        ]
    );
}

// ─── Property tests ────────────────────────────────────────────

mod proptest_coverage {
    use super::scan;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lengths_cover_any_input(source in "\\PC{0,64}") {
            let total: usize = scan(&source).iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, source.len());
        }

        #[test]
        fn lengths_cover_sql_like_input(
            source in "[a-zA-Z0-9 '\"\\[\\]`\\-/*.,;()\n\r\t#\\\\]{0,80}"
        ) {
            let total: usize = scan(&source).iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, source.len());
        }
    }
}
