use crate::TokenId;

/// A rewrite request that was rejected. The list is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    #[error("token {0} is not in the list")]
    StaleToken(TokenId),

    #[error("cannot change token {0} to an empty value")]
    EmptyValue(TokenId),

    #[error("token {last} is not reachable from token {first}")]
    BrokenRange { first: TokenId, last: TokenId },
}
