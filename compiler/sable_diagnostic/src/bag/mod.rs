//! Diagnostic bag: the buffered sink the lexer and parser report into.
//!
//! A bag is append-only during normal parsing. Speculative parsing swaps in
//! a [`DiagnosticBag::fork`]; on success the fork is committed back with
//! [`DiagnosticBag::commit`], on failure it is simply dropped, so a
//! rejected alternative never leaks diagnostics.
//!
//! Tree construction claims diagnostics bottom-up: every node remembers the
//! [`BagMark`] from when it started and, when finished, takes the entries
//! reported since then that fall inside its span.

use sable_ir::Span;

use crate::Diagnostic;

/// Position in a bag, taken before parsing a construct.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BagMark(usize);

/// Ordered diagnostic buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticBag {
    items: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        DiagnosticBag::default()
    }

    /// Append a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(code = %diagnostic.code, span = %diagnostic.span, "diagnostic reported");
        self.items.push(diagnostic);
    }

    /// An empty, isolated buffer for speculative work.
    #[must_use]
    pub fn fork(&self) -> DiagnosticBag {
        DiagnosticBag::new()
    }

    /// Append everything a fork collected, in discovery order.
    pub fn commit(&mut self, fork: DiagnosticBag) {
        self.items.extend(fork.items);
    }

    /// Current position.
    pub fn mark(&self) -> BagMark {
        BagMark(self.items.len())
    }

    /// Remove and return every diagnostic reported after `mark` whose span
    /// lies within `span`. Entries outside `span` stay for an ancestor.
    pub fn take_within(&mut self, mark: BagMark, span: Span) -> Vec<Diagnostic> {
        let start = mark.0.min(self.items.len());
        if start == self.items.len() {
            return Vec::new();
        }
        let tail = self.items.split_off(start);
        let (taken, kept): (Vec<_>, Vec<_>) =
            tail.into_iter().partition(|d| span.contains_span(d.span));
        self.items.extend(kept);
        taken
    }

    /// Remove and return every diagnostic reported after `mark`.
    pub fn take_since(&mut self, mark: BagMark) -> Vec<Diagnostic> {
        let start = mark.0.min(self.items.len());
        self.items.split_off(start)
    }

    /// Remove and return everything.
    pub fn take_all(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Consume the bag, returning diagnostics ordered by span start. Ties
    /// keep discovery order.
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut items = self.items;
        sort_diagnostics(&mut items);
        items
    }
}

impl Extend<Diagnostic> for DiagnosticBag {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

/// Stable sort by span start.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by_key(|d| d.span.start);
}

#[cfg(test)]
mod tests;
