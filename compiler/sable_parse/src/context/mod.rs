//! Parse context flags for context-sensitive parsing.
//!
//! A few grammar decisions depend on where the parser currently is rather
//! than on the next tokens alone. For example `await` is only an operator
//! inside async code, and a `?` after a type inside a pattern may be the
//! conditional operator instead of a nullable suffix.

/// Context flags for parsing.
///
/// Multiple flags can be combined; the parser saves and restores the whole
/// set around nested productions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ParseContext(u16);

impl ParseContext {
    /// No special context.
    pub(crate) const NONE: Self = Self(0);

    /// `await` is an operator: async members, async lambdas and top-level
    /// statements.
    pub(crate) const IN_ASYNC: Self = Self(1 << 0);

    /// Parsing the type of a pattern or an `as` operand. A trailing `?`
    /// is only a nullable suffix when the conditional operator cannot
    /// follow.
    pub(crate) const IN_PATTERN: Self = Self(1 << 1);

    /// Parsing the body of a query expression. Query clause keywords end
    /// the current clause's expression.
    pub(crate) const IN_QUERY: Self = Self(1 << 2);

    /// Check if a flag is set.
    #[inline]
    pub(crate) const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Add a flag.
    #[inline]
    #[must_use]
    pub(crate) const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Remove a flag.
    #[inline]
    #[must_use]
    pub(crate) const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    #[inline]
    pub(crate) const fn in_async(self) -> bool {
        self.has(Self::IN_ASYNC)
    }

    #[inline]
    pub(crate) const fn in_pattern(self) -> bool {
        self.has(Self::IN_PATTERN)
    }

    #[inline]
    pub(crate) const fn in_query(self) -> bool {
        self.has(Self::IN_QUERY)
    }
}

#[cfg(test)]
mod tests;
