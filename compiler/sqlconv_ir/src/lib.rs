//! Token model and rewrite overlay for sqlconv.
//!
//! A [`TokenList`] is an arena of tokens linked by stable [`TokenId`] handles.
//! Each token points back into the shared source text by [`Span`] and may
//! carry a rewritten value. Dialect passes inspect the list through the match
//! engine ([`matching`]) and edit it only through the rewrite engine
//! ([`rewrite`]); rendering walks the list once and picks, per token, the
//! rewritten value or the original source slice.
//!
//! Nothing here knows how the tokens were produced. `sqlconv_lexer` builds
//! lists from source buffers.

mod emitter;
pub mod matching;
pub mod rewrite;
mod span;
pub mod token;
pub mod value;

#[cfg(test)]
mod test_support;

pub use emitter::{Emitter, FileEmitter, StringEmitter};
pub use matching::CaseMode;
pub use rewrite::{Casing, RewriteError};
pub use span::Span;
pub use token::{
    literal_body, SemanticSubtype, SemanticType, Token, TokenFlags, TokenId, TokenKind, TokenList,
};
pub use value::{MultiPartValue, TokenValue};
