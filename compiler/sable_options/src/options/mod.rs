//! The parse options handle.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::Span;

use crate::{DocumentationMode, Feature, LanguageVersion, SourceCodeKind};

static DEFAULT: LazyLock<ParseOptions> = LazyLock::new(|| {
    ParseOptions::new(
        LanguageVersion::Default,
        DocumentationMode::Parse,
        SourceCodeKind::Regular,
        Vec::<&str>::new(),
    )
});

/// Immutable parse configuration. Cloning is a reference-count bump.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    inner: Arc<OptionsInner>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct OptionsInner {
    specified_kind: SourceCodeKind,
    kind: SourceCodeKind,
    specified_language_version: LanguageVersion,
    language_version: LanguageVersion,
    documentation_mode: DocumentationMode,
    preprocessor_symbols: Vec<Option<String>>,
    features: BTreeMap<String, String>,
    errors: Vec<Diagnostic>,
}

/// Something usable as a preprocessor symbol entry. `None` models an
/// absent entry, reported as `null`.
pub trait IntoSymbolName {
    fn into_symbol_name(self) -> Option<String>;
}

impl IntoSymbolName for &str {
    fn into_symbol_name(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoSymbolName for String {
    fn into_symbol_name(self) -> Option<String> {
        Some(self)
    }
}

impl IntoSymbolName for Option<&str> {
    fn into_symbol_name(self) -> Option<String> {
        self.map(str::to_string)
    }
}

impl IntoSymbolName for Option<String> {
    fn into_symbol_name(self) -> Option<String> {
        self
    }
}

impl ParseOptions {
    /// Build options from raw inputs. Invalid values are kept and reported
    /// through [`ParseOptions::errors`].
    pub fn new<I, S>(
        language_version: LanguageVersion,
        documentation_mode: DocumentationMode,
        kind: SourceCodeKind,
        preprocessor_symbols: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoSymbolName,
    {
        let inner = OptionsInner {
            specified_kind: kind,
            kind: kind.effective(),
            specified_language_version: language_version,
            language_version: language_version.effective(),
            documentation_mode,
            preprocessor_symbols: dedup_symbols(preprocessor_symbols),
            features: BTreeMap::new(),
            errors: Vec::new(),
        };
        Self::from_inner(inner)
    }

    fn from_inner(mut inner: OptionsInner) -> Self {
        inner.kind = inner.specified_kind.effective();
        inner.language_version = inner.specified_language_version.effective();
        inner.errors = validate(&inner);
        ParseOptions {
            inner: Arc::new(inner),
        }
    }

    fn rebuild(&self, change: impl FnOnce(&mut OptionsInner)) -> Self {
        let mut inner = (*self.inner).clone();
        change(&mut inner);
        Self::from_inner(inner)
    }

    /// Do both handles point at the same allocation?
    pub fn ptr_eq(&self, other: &ParseOptions) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Effective source kind.
    pub fn kind(&self) -> SourceCodeKind {
        self.inner.kind
    }

    /// Source kind as requested.
    pub fn specified_kind(&self) -> SourceCodeKind {
        self.inner.specified_kind
    }

    /// Resolved language version.
    pub fn language_version(&self) -> LanguageVersion {
        self.inner.language_version
    }

    /// Language version as requested.
    pub fn specified_language_version(&self) -> LanguageVersion {
        self.inner.specified_language_version
    }

    pub fn documentation_mode(&self) -> DocumentationMode {
        self.inner.documentation_mode
    }

    /// Preprocessor symbol entries in order, including invalid ones.
    pub fn preprocessor_symbols(&self) -> impl Iterator<Item = Option<&str>> {
        self.inner.preprocessor_symbols.iter().map(Option::as_deref)
    }

    /// Is `name` predefined for `#if` evaluation?
    pub fn is_symbol_defined(&self, name: &str) -> bool {
        self.inner
            .preprocessor_symbols
            .iter()
            .any(|s| s.as_deref() == Some(name))
    }

    pub fn features(&self) -> &BTreeMap<String, String> {
        &self.inner.features
    }

    /// Validation diagnostics for this configuration.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.inner.errors
    }

    /// Is `feature` on, either by flag or by the resolved version?
    pub fn is_feature_enabled(&self, feature: Feature) -> bool {
        let flagged = self
            .inner
            .features
            .get(feature.flag_name())
            .is_some_and(|v| !v.eq_ignore_ascii_case("false"));
        flagged || self.inner.language_version.supports(feature.required_version())
    }

    /// The "feature not available" diagnostic for `feature` at `span`, or
    /// `None` when the feature is enabled.
    ///
    /// Preview-only features report `CS8652`; everything else reports
    /// `CS8773` naming the current and the required version.
    pub fn check_feature(&self, feature: Feature, span: Span) -> Option<Diagnostic> {
        if self.is_feature_enabled(feature) {
            return None;
        }
        let required = feature.required_version();
        let diagnostic = if required == LanguageVersion::Preview {
            Diagnostic::new(ErrorCode::CS8652, span).with_arg(feature.display_name())
        } else {
            Diagnostic::new(ErrorCode::CS8773, span)
                .with_arg(feature.display_name())
                .with_arg(self.inner.language_version.display())
                .with_arg(required.display())
        };
        Some(diagnostic)
    }

    #[must_use]
    pub fn with_kind(&self, kind: SourceCodeKind) -> Self {
        if self.inner.specified_kind == kind {
            return self.clone();
        }
        self.rebuild(|o| o.specified_kind = kind)
    }

    #[must_use]
    pub fn with_language_version(&self, version: LanguageVersion) -> Self {
        if self.inner.specified_language_version == version {
            return self.clone();
        }
        self.rebuild(|o| o.specified_language_version = version)
    }

    #[must_use]
    pub fn with_documentation_mode(&self, mode: DocumentationMode) -> Self {
        if self.inner.documentation_mode == mode {
            return self.clone();
        }
        self.rebuild(|o| o.documentation_mode = mode)
    }

    #[must_use]
    pub fn with_preprocessor_symbols<I, S>(&self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoSymbolName,
    {
        let symbols = dedup_symbols(symbols);
        if self.inner.preprocessor_symbols == symbols {
            return self.clone();
        }
        self.rebuild(|o| o.preprocessor_symbols = symbols)
    }

    /// Replace the explicit feature map.
    #[must_use]
    pub fn with_features<I, K, V>(&self, features: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let features: BTreeMap<String, String> = features
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if self.inner.features == features {
            return self.clone();
        }
        self.rebuild(|o| o.features = features)
    }
}

impl Default for ParseOptions {
    /// The shared process-wide default configuration.
    fn default() -> Self {
        DEFAULT.clone()
    }
}

impl PartialEq for ParseOptions {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.inner == other.inner
    }
}

impl Eq for ParseOptions {}

impl Hash for ParseOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

fn dedup_symbols<I, S>(symbols: I) -> Vec<Option<String>>
where
    I: IntoIterator<Item = S>,
    S: IntoSymbolName,
{
    let mut out: Vec<Option<String>> = Vec::new();
    for symbol in symbols {
        let symbol = symbol.into_symbol_name();
        if !out.contains(&symbol) {
            out.push(symbol);
        }
    }
    out
}

fn validate(inner: &OptionsInner) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    if !inner.specified_kind.is_valid() {
        errors.push(
            Diagnostic::new(ErrorCode::CS8190, Span::DUMMY)
                .with_arg(inner.specified_kind.to_string()),
        );
    }
    if !inner.specified_language_version.is_valid() {
        errors.push(
            Diagnostic::new(ErrorCode::CS8192, Span::DUMMY)
                .with_arg(inner.specified_language_version.to_string()),
        );
    }
    if !inner.documentation_mode.is_valid() {
        errors.push(
            Diagnostic::new(ErrorCode::CS8191, Span::DUMMY)
                .with_arg(inner.documentation_mode.to_string()),
        );
    }
    for symbol in &inner.preprocessor_symbols {
        match symbol {
            Some(name) if is_valid_identifier(name) => {}
            Some(name) => errors.push(
                Diagnostic::new(ErrorCode::CS8301, Span::DUMMY).with_arg(name.clone()),
            ),
            None => errors.push(Diagnostic::new(ErrorCode::CS8301, Span::DUMMY).with_arg("null")),
        }
    }
    errors
}

/// Identifier rule for symbol names: a letter or `_`, then letters,
/// digits or `_`.
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
