//! Rewrite engine: the only way a token's rendered output can differ from
//! its source text.
//!
//! Every mutation checks its handles first and either applies completely or
//! returns a [`RewriteError`] with the list untouched.
//!
//! Rendering walks the list head to tail. Each token contributes its
//! rewritten value if it has one, else its source text; removed tokens
//! contribute nothing.

mod casing;
mod error;

pub use casing::Casing;
pub use error::RewriteError;

use tracing::trace;

use crate::value::char_window;
use crate::{Emitter, Token, TokenFlags, TokenId, TokenList, TokenValue};

impl TokenList<'_> {
    fn live_token(&self, id: TokenId) -> Result<&Token, RewriteError> {
        self.get(id).ok_or(RewriteError::StaleToken(id))
    }

    fn store_target(&mut self, id: TokenId, value: TokenValue) -> Result<(), RewriteError> {
        let token = self.get_mut(id).ok_or(RewriteError::StaleToken(id))?;
        if value.is_empty() {
            return Err(RewriteError::EmptyValue(id));
        }
        trace!(token = %id, value = value.as_str(), "change");
        token.set_target(Some(value));
        Ok(())
    }

    /// Casing of a template token's source text.
    fn template_casing(&self, template: TokenId) -> Result<Option<Casing>, RewriteError> {
        let token = self.live_token(template)?;
        Ok(Casing::detect(token.source_text(self.source())))
    }

    // ─── Setting values ────────────────────────────────────────────

    /// Set the rewritten value.
    ///
    /// With a `template`, `value` is first recased to the template's casing.
    /// Overwrites any previous rewritten value.
    pub fn change(
        &mut self,
        id: TokenId,
        value: &str,
        template: Option<TokenId>,
    ) -> Result<(), RewriteError> {
        self.live_token(id)?;
        let value = match template {
            Some(template) => match self.template_casing(template)? {
                Some(casing) => casing.apply(value),
                None => value.to_owned(),
            },
            None => value.to_owned(),
        };
        self.store_target(id, TokenValue::from(value))
    }

    /// Set the rewritten value verbatim.
    pub fn change_no_format(&mut self, id: TokenId, value: &str) -> Result<(), RewriteError> {
        self.store_target(id, TokenValue::from(value))
    }

    /// Set the rewritten value to a decimal integer.
    pub fn change_int(&mut self, id: TokenId, value: i64) -> Result<(), RewriteError> {
        let mut staged = TokenValue::new();
        staged.append_int(value);
        self.store_target(id, staged)
    }

    /// Install a staged value verbatim.
    pub fn change_to_value(&mut self, id: TokenId, value: &TokenValue) -> Result<(), RewriteError> {
        self.store_target(id, value.clone())
    }

    /// Set the rewritten value to `len` characters of another token's source
    /// text, starting at character `start`.
    pub fn change_from_token(
        &mut self,
        id: TokenId,
        source: TokenId,
        start: usize,
        len: usize,
    ) -> Result<(), RewriteError> {
        self.live_token(id)?;
        let text = self.live_token(source)?.source_text(self.source());
        let value = TokenValue::from(char_window(text, start, len));
        self.store_target(id, value)
    }

    /// Recase the existing rewritten value.
    ///
    /// Without a `template` the token's own source text is the template.
    /// A token without a rewritten value is left alone.
    pub fn format_target(
        &mut self,
        id: TokenId,
        template: Option<TokenId>,
    ) -> Result<(), RewriteError> {
        let token = self.live_token(id)?;
        let Some(current) = token.target() else {
            return Ok(());
        };
        let Some(casing) = self.template_casing(template.unwrap_or(id))? else {
            return Ok(());
        };
        let value = TokenValue::from(casing.apply(current.as_str()));
        self.store_target(id, value)
    }

    /// Drop the rewritten value; the token renders its source again.
    pub fn clear_target(&mut self, id: TokenId) -> Result<(), RewriteError> {
        let token = self.get_mut(id).ok_or(RewriteError::StaleToken(id))?;
        token.set_target(None);
        Ok(())
    }

    /// Render as spaces of the same displayed width, keeping alignment.
    ///
    /// Line breaks inside the token are kept, so the lines after it stay
    /// where they were.
    pub fn replace_with_spaces(&mut self, id: TokenId) -> Result<(), RewriteError> {
        let blanked: String = self
            .live_token(id)?
            .effective_text(self.source())
            .chars()
            .map(|c| if matches!(c, '\n' | '\r') { c } else { ' ' })
            .collect();
        if blanked.is_empty() {
            return Ok(());
        }
        self.store_target(id, TokenValue::from(blanked))
    }

    // ─── Soft delete ───────────────────────────────────────────────

    fn set_removed(&mut self, id: TokenId, removed: bool) {
        if let Some(token) = self.get_mut(id) {
            token.flags_mut().set(TokenFlags::REMOVED, removed);
        }
    }

    /// The preceding token, when it is whitespace without a line break.
    fn absorbable_before(&self, id: TokenId) -> Option<TokenId> {
        self.prev(id).filter(|&prev| self.is_horizontal_space(prev))
    }

    /// Mark a token REMOVED.
    ///
    /// With `absorb_preceding_space`, a whitespace run right before it is
    /// removed too. Line breaks are never absorbed.
    pub fn remove(&mut self, id: TokenId, absorb_preceding_space: bool) -> Result<(), RewriteError> {
        self.live_token(id)?;
        if absorb_preceding_space {
            if let Some(space) = self.absorbable_before(id) {
                self.set_removed(space, true);
            }
        }
        trace!(token = %id, absorb = absorb_preceding_space, "remove");
        self.set_removed(id, true);
        Ok(())
    }

    /// Mark every token from `first` through `last` REMOVED.
    ///
    /// `last` must be reachable from `first` going forward; otherwise nothing
    /// is removed.
    pub fn remove_range(
        &mut self,
        first: TokenId,
        last: TokenId,
        absorb_preceding_space: bool,
    ) -> Result<(), RewriteError> {
        self.live_token(first)?;
        self.live_token(last)?;
        let mut run = Vec::new();
        let mut cursor = Some(first);
        while let Some(id) = cursor {
            run.push(id);
            if id == last {
                break;
            }
            cursor = self.next(id);
        }
        if run.last() != Some(&last) {
            return Err(RewriteError::BrokenRange { first, last });
        }

        if absorb_preceding_space {
            if let Some(space) = self.absorbable_before(first) {
                self.set_removed(space, true);
            }
        }
        trace!(first = %first, last = %last, count = run.len(), "remove range");
        for id in run {
            self.set_removed(id, true);
        }
        Ok(())
    }

    /// Clear the REMOVED flag.
    pub fn restore(&mut self, id: TokenId) -> Result<(), RewriteError> {
        self.live_token(id)?;
        self.set_removed(id, false);
        Ok(())
    }

    // ─── Rendering ─────────────────────────────────────────────────

    /// Append what the token renders as. Removed and dead tokens append
    /// nothing.
    pub fn append_target(&self, id: TokenId, out: &mut String) {
        if let Some(token) = self.get(id).filter(|t| !t.is_removed()) {
            out.push_str(token.effective_text(self.source()));
        }
    }

    /// Byte length [`append_target`](Self::append_target) would append.
    pub fn target_len(&self, id: TokenId) -> usize {
        self.get(id)
            .filter(|t| !t.is_removed())
            .map_or(0, |t| t.effective_text(self.source()).len())
    }

    /// Render the whole document.
    pub fn render(&self) -> String {
        let capacity = self.iter().map(|(id, _)| self.target_len(id)).sum();
        let mut out = String::with_capacity(capacity);
        for (id, _) in self.iter() {
            self.append_target(id, &mut out);
        }
        out
    }

    /// Render the whole document into an emitter.
    pub fn render_into(&self, emitter: &mut impl Emitter) {
        for (_, token) in self.iter() {
            if !token.is_removed() {
                emitter.emit(token.effective_text(self.source()));
            }
        }
    }
}

#[cfg(test)]
mod tests;
