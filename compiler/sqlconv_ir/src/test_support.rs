//! Minimal tokenizer for unit tests, so list tests do not depend on the
//! real lexer crate.

use crate::{Span, Token, TokenKind, TokenList};

/// Split `source` into words, integers, `'strings'`, horizontal whitespace
/// runs, single line breaks and single-character symbols.
#[allow(clippy::cast_possible_truncation, reason = "test sources are tiny")]
pub(crate) fn tokenize(source: &str) -> TokenList<'_> {
    let mut list = TokenList::new(source);
    let mut chars = source.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        let kind = if c.is_alphabetic() || c == '_' {
            while chars
                .next_if(|&(_, n)| n.is_alphanumeric() || n == '_')
                .is_some()
            {}
            TokenKind::Word
        } else if c.is_ascii_digit() {
            while chars.next_if(|&(_, n)| n.is_ascii_digit()).is_some() {}
            TokenKind::Number
        } else if c == '\'' {
            while chars.next_if(|&(_, n)| n != '\'').is_some() {}
            chars.next();
            TokenKind::String
        } else if matches!(c, ' ' | '\t') {
            while chars.next_if(|&(_, n)| matches!(n, ' ' | '\t')).is_some() {}
            TokenKind::Symbol
        } else {
            TokenKind::Symbol
        };
        let end = chars.peek().map_or(source.len(), |&(i, _)| i);
        let span = Span::new(start as u32, end as u32);
        list.push(Token::new(kind, span, (source.len() - end) as u32));
    }
    list
}

/// Ids of all linked tokens, head to tail.
pub(crate) fn ids(list: &TokenList<'_>) -> Vec<crate::TokenId> {
    list.iter().map(|(id, _)| id).collect()
}

/// Source texts of all linked tokens, head to tail.
pub(crate) fn texts<'a>(list: &'a TokenList<'_>) -> Vec<&'a str> {
    list.iter()
        .map(|(_, token)| token.source_text(list.source()))
        .collect()
}
