//! Doubly linked token list over an arena.
//!
//! Nodes live in a `Vec<Option<Node>>` addressed by [`TokenId`]. Links are
//! explicit `prev`/`next` handles, so splicing is O(1) and never moves
//! another token. Unlinking frees the slot; the slot is not reused, which
//! keeps every stale handle reliably dead.

use super::{is_blank_char, is_horizontal_space, literal_body, Token, TokenFlags, TokenId, TokenKind};
use crate::value::char_window;
use crate::RewriteError;

#[derive(Clone, Debug)]
struct Node {
    token: Token,
    prev: Option<TokenId>,
    next: Option<TokenId>,
}

/// The editable token sequence of one document.
///
/// Borrows the decoded document text; tokens refer into it by span.
/// Order is defined only by the links: there are no positional indices.
#[derive(Clone, Debug)]
pub struct TokenList<'src> {
    source: &'src str,
    slots: Vec<Option<Node>>,
    head: Option<TokenId>,
    tail: Option<TokenId>,
    /// Number of linked tokens (removed ones included).
    len: usize,
}

impl<'src> TokenList<'src> {
    /// Create an empty list over `source`.
    pub fn new(source: &'src str) -> Self {
        Self::with_capacity(source, 0)
    }

    /// Create an empty list with room for `capacity` tokens.
    pub fn with_capacity(source: &'src str, capacity: usize) -> Self {
        TokenList {
            source,
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// The document text tokens point into.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Number of linked tokens, removed ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn head(&self) -> Option<TokenId> {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> Option<TokenId> {
        self.tail
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "token count is bounded by source length, which fits in u32"
    )]
    fn alloc(&mut self, token: Token) -> TokenId {
        let id = TokenId::from_raw(self.slots.len() as u32);
        self.slots.push(Some(Node {
            token,
            prev: None,
            next: None,
        }));
        id
    }

    #[inline]
    fn node(&self, id: TokenId) -> Option<&Node> {
        self.slots.get(id.index())?.as_ref()
    }

    #[inline]
    fn node_mut(&mut self, id: TokenId) -> Option<&mut Node> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    /// Wire a freshly allocated node between `prev` and `next`.
    fn link(&mut self, id: TokenId, prev: Option<TokenId>, next: Option<TokenId>) {
        if let Some(node) = self.node_mut(id) {
            node.prev = prev;
            node.next = next;
        }
        match prev.and_then(|p| self.node_mut(p)) {
            Some(node) => node.next = Some(id),
            None => self.head = Some(id),
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(node) => node.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.len += 1;
    }

    /// Append a token at the tail.
    pub fn push(&mut self, token: Token) -> TokenId {
        let id = self.alloc(token);
        self.link(id, self.tail, None);
        id
    }

    /// `true` while `id` names a linked token.
    #[inline]
    pub fn contains(&self, id: TokenId) -> bool {
        self.node(id).is_some()
    }

    #[inline]
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.node(id).map(|node| &node.token)
    }

    /// Mutable access for classification passes.
    ///
    /// The rewritten value and flags are not reachable from here; they
    /// change only through the rewrite engine.
    #[inline]
    pub fn get_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.node_mut(id).map(|node| &mut node.token)
    }

    #[inline]
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        self.node(id)?.next
    }

    #[inline]
    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        self.node(id)?.prev
    }

    /// Source text of a token.
    pub fn text(&self, id: TokenId) -> Option<&str> {
        self.get(id).map(|token| token.source_text(self.source))
    }

    /// Rewritten value if set, else source text.
    pub fn effective_text(&self, id: TokenId) -> Option<&str> {
        self.get(id).map(|token| token.effective_text(self.source))
    }

    /// Iterate head to tail.
    pub fn iter(&self) -> Iter<'_, 'src> {
        Iter {
            list: self,
            cursor: self.head,
            forward: true,
        }
    }

    /// Iterate tail to head.
    pub fn iter_rev(&self) -> Iter<'_, 'src> {
        Iter {
            list: self,
            cursor: self.tail,
            forward: false,
        }
    }

    // ─── Splicing ──────────────────────────────────────────────────

    /// Link `token` right after `anchor`. The new token is flagged INSERTED.
    pub fn insert_after(&mut self, anchor: TokenId, token: Token) -> Result<TokenId, RewriteError> {
        let next = self.node(anchor).ok_or(RewriteError::StaleToken(anchor))?.next;
        let id = self.alloc(token.with_flags(TokenFlags::INSERTED));
        self.link(id, Some(anchor), next);
        Ok(id)
    }

    /// Link `token` right before `anchor`. The new token is flagged INSERTED.
    pub fn insert_before(
        &mut self,
        anchor: TokenId,
        token: Token,
    ) -> Result<TokenId, RewriteError> {
        let prev = self.node(anchor).ok_or(RewriteError::StaleToken(anchor))?.prev;
        let id = self.alloc(token.with_flags(TokenFlags::INSERTED));
        self.link(id, prev, Some(anchor));
        Ok(id)
    }

    /// Copy a token, giving the copy its own source storage.
    ///
    /// Kind, classification, rewritten value and flags are copied too.
    pub fn copy_token(&self, id: TokenId) -> Option<Token> {
        self.get(id).map(|token| token.detached_copy(self.source))
    }

    /// Insert a copy of `source` after `anchor`.
    pub fn insert_copy_after(
        &mut self,
        anchor: TokenId,
        source: TokenId,
    ) -> Result<TokenId, RewriteError> {
        let copy = self
            .copy_token(source)
            .ok_or(RewriteError::StaleToken(source))?;
        self.insert_after(anchor, copy)
    }

    /// Splice a token out and free it. The handle is dead afterwards.
    pub fn unlink(&mut self, id: TokenId) -> Option<Token> {
        let node = self.slots.get_mut(id.index())?.take()?;
        match node.prev.and_then(|p| self.node_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.node_mut(n)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Some(node.token)
    }

    // ─── Predicates ────────────────────────────────────────────────

    /// Whitespace and line breaks only.
    pub fn is_blank(&self, id: TokenId) -> bool {
        self.get(id).is_some_and(|token| {
            let text = token.source_text(self.source);
            token.kind() == TokenKind::Symbol && !text.is_empty() && text.chars().all(is_blank_char)
        })
    }

    /// Whitespace that does not include a line break.
    pub fn is_horizontal_space(&self, id: TokenId) -> bool {
        self.get(id).is_some_and(|token| {
            let text = token.source_text(self.source);
            token.kind() == TokenKind::Symbol
                && !text.is_empty()
                && text.chars().all(is_horizontal_space)
        })
    }

    /// Source text is exactly one character.
    pub fn is_single_char(&self, id: TokenId) -> bool {
        self.text(id).is_some_and(|text| {
            let mut chars = text.chars();
            chars.next().is_some() && chars.next().is_none()
        })
    }

    /// Source text is all ASCII digits.
    pub fn is_numeric(&self, id: TokenId) -> bool {
        self.text(id)
            .is_some_and(|text| !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()))
    }

    /// String literal whose content is an integer, e.g. `'42'` or `'-1'`.
    pub fn is_numeric_in_string(&self, id: TokenId) -> bool {
        self.get(id).is_some_and(|token| {
            token.kind() == TokenKind::String
                && is_integer_text(literal_body(token.source_text(self.source)))
        })
    }

    #[inline]
    pub fn is_removed(&self, id: TokenId) -> bool {
        self.get(id).is_some_and(Token::is_removed)
    }

    #[inline]
    pub fn is_target_set(&self, id: TokenId) -> bool {
        self.get(id).is_some_and(Token::is_target_set)
    }

    /// Integer value of a number token, or of a string literal's content.
    pub fn get_int(&self, id: TokenId) -> Option<i64> {
        let token = self.get(id)?;
        let text = token.source_text(self.source);
        let text = if token.kind() == TokenKind::String {
            literal_body(text)
        } else {
            text
        };
        text.trim().parse().ok()
    }

    /// Integer value of `len` characters of source text starting at
    /// character `start`. The window is clamped to the token.
    pub fn get_int_at(&self, id: TokenId, start: usize, len: usize) -> Option<i64> {
        let text = self.text(id)?;
        char_window(text, start, len).trim().parse().ok()
    }

    /// First token at or after `id` that is not blank.
    pub fn skip_blanks(&self, id: TokenId) -> Option<TokenId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if !self.is_blank(current) {
                return self.contains(current).then_some(current);
            }
            cursor = self.next(current);
        }
        None
    }
}

/// Optional sign followed by at least one ASCII digit.
pub(crate) fn is_integer_text(text: &str) -> bool {
    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Iterator over `(TokenId, &Token)` in link order.
pub struct Iter<'a, 'src> {
    list: &'a TokenList<'src>,
    cursor: Option<TokenId>,
    forward: bool,
}

impl<'a> Iterator for Iter<'a, '_> {
    type Item = (TokenId, &'a Token);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.node(id)?;
        self.cursor = if self.forward { node.next } else { node.prev };
        Some((id, &node.token))
    }
}
