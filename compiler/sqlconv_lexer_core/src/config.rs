//! Dialect switches for the raw scanner.

/// Configuration for the raw scanner.
///
/// The defaults describe ANSI-ish SQL as accepted by most vendors: `''`
/// doubling inside strings, flat `/* */` comments, `--` line comments.
/// Dialect-specific rules are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LexerConfig {
    /// Treat `\` inside single-quoted strings as an escape for the next
    /// character (MySQL). Off by default, since `'C:\'` is a complete
    /// string in standard SQL.
    pub backslash_escapes: bool,

    /// Allow `/* /* */ */` nesting (PostgreSQL).
    pub nested_comments: bool,

    /// Treat `#` as a line comment introducer (MySQL).
    pub hash_comments: bool,
}

impl LexerConfig {
    /// Create a config with backslash escapes enabled or disabled.
    #[must_use]
    pub fn with_backslash_escapes(self, enabled: bool) -> Self {
        Self {
            backslash_escapes: enabled,
            ..self
        }
    }

    /// Create a config with nested block comments enabled or disabled.
    #[must_use]
    pub fn with_nested_comments(self, enabled: bool) -> Self {
        Self {
            nested_comments: enabled,
            ..self
        }
    }

    /// Create a config with `#` line comments enabled or disabled.
    #[must_use]
    pub fn with_hash_comments(self, enabled: bool) -> Self {
        Self {
            hash_comments: enabled,
            ..self
        }
    }

    /// MySQL preset: backslash escapes and `#` comments.
    pub fn mysql() -> Self {
        Self {
            backslash_escapes: true,
            nested_comments: false,
            hash_comments: true,
        }
    }

    /// PostgreSQL preset: nested block comments.
    pub fn postgres() -> Self {
        Self {
            nested_comments: true,
            ..Self::default()
        }
    }
}
