//! Language features gated by version.
//!
//! The table is pure data: each feature knows the version that introduced
//! it, its user-facing name, and the flag name that force-enables it via
//! [`crate::ParseOptions::with_features`].

use crate::LanguageVersion;

/// A version-gated piece of syntax.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    InterpolatedStrings,
    NullPropagation,
    ExpressionBodiedMembers,
    Tuples,
    ThrowExpression,
    PatternMatching,
    LocalFunctions,
    RefLocalsReturns,
    Discards,
    DefaultLiteral,
    ReadOnlyReferences,
    RefStructs,
    IndexOperator,
    RangeOperator,
    RecursivePatterns,
    SwitchExpression,
    NullCoalescingAssignment,
    UsingDeclarations,
    StaticLocalFunctions,
    AsyncStreams,
    TargetTypedObjectCreation,
    Records,
    InitOnlySetters,
    TopLevelStatements,
    TypePattern,
    RelationalPattern,
    LogicalPatterns,
    StaticAnonymousFunctions,
    RecordStructs,
    GlobalUsingDirective,
    FileScopedNamespace,
    ExtendedPropertyPatterns,
    ListPattern,
    SlicePattern,
    RawStringLiterals,
    UnsignedRightShift,
    RequiredMembers,
    FileTypes,
    Utf8StringLiterals,
    CollectionExpressions,
    PrimaryConstructors,
    RelaxedPartialOrdering,
}

impl Feature {
    pub const ALL: &[Feature] = &[
        Feature::InterpolatedStrings,
        Feature::NullPropagation,
        Feature::ExpressionBodiedMembers,
        Feature::Tuples,
        Feature::ThrowExpression,
        Feature::PatternMatching,
        Feature::LocalFunctions,
        Feature::RefLocalsReturns,
        Feature::Discards,
        Feature::DefaultLiteral,
        Feature::ReadOnlyReferences,
        Feature::RefStructs,
        Feature::IndexOperator,
        Feature::RangeOperator,
        Feature::RecursivePatterns,
        Feature::SwitchExpression,
        Feature::NullCoalescingAssignment,
        Feature::UsingDeclarations,
        Feature::StaticLocalFunctions,
        Feature::AsyncStreams,
        Feature::TargetTypedObjectCreation,
        Feature::Records,
        Feature::InitOnlySetters,
        Feature::TopLevelStatements,
        Feature::TypePattern,
        Feature::RelationalPattern,
        Feature::LogicalPatterns,
        Feature::StaticAnonymousFunctions,
        Feature::RecordStructs,
        Feature::GlobalUsingDirective,
        Feature::FileScopedNamespace,
        Feature::ExtendedPropertyPatterns,
        Feature::ListPattern,
        Feature::SlicePattern,
        Feature::RawStringLiterals,
        Feature::UnsignedRightShift,
        Feature::RequiredMembers,
        Feature::FileTypes,
        Feature::Utf8StringLiterals,
        Feature::CollectionExpressions,
        Feature::PrimaryConstructors,
        Feature::RelaxedPartialOrdering,
    ];

    /// The first version in which the feature is available.
    pub const fn required_version(self) -> LanguageVersion {
        use Feature as F;
        use LanguageVersion as V;
        match self {
            F::InterpolatedStrings | F::NullPropagation | F::ExpressionBodiedMembers => V::CSharp6,
            F::Tuples
            | F::ThrowExpression
            | F::PatternMatching
            | F::LocalFunctions
            | F::RefLocalsReturns
            | F::Discards => V::CSharp7,
            F::DefaultLiteral => V::CSharp7_1,
            F::ReadOnlyReferences | F::RefStructs => V::CSharp7_2,
            F::IndexOperator
            | F::RangeOperator
            | F::RecursivePatterns
            | F::SwitchExpression
            | F::NullCoalescingAssignment
            | F::UsingDeclarations
            | F::StaticLocalFunctions
            | F::AsyncStreams => V::CSharp8,
            F::TargetTypedObjectCreation
            | F::Records
            | F::InitOnlySetters
            | F::TopLevelStatements
            | F::TypePattern
            | F::RelationalPattern
            | F::LogicalPatterns
            | F::StaticAnonymousFunctions => V::CSharp9,
            F::RecordStructs
            | F::GlobalUsingDirective
            | F::FileScopedNamespace
            | F::ExtendedPropertyPatterns => V::CSharp10,
            F::ListPattern
            | F::SlicePattern
            | F::RawStringLiterals
            | F::UnsignedRightShift
            | F::RequiredMembers
            | F::FileTypes
            | F::Utf8StringLiterals => V::CSharp11,
            F::CollectionExpressions | F::PrimaryConstructors => V::CSharp12,
            F::RelaxedPartialOrdering => V::Preview,
        }
    }

    /// Name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            Feature::InterpolatedStrings => "interpolated strings",
            Feature::NullPropagation => "null propagating operator",
            Feature::ExpressionBodiedMembers => "expression-bodied members",
            Feature::Tuples => "tuples",
            Feature::ThrowExpression => "throw expression",
            Feature::PatternMatching => "pattern matching",
            Feature::LocalFunctions => "local functions",
            Feature::RefLocalsReturns => "byref locals and returns",
            Feature::Discards => "discards",
            Feature::DefaultLiteral => "default literal",
            Feature::ReadOnlyReferences => "readonly references",
            Feature::RefStructs => "ref structs",
            Feature::IndexOperator => "index operator",
            Feature::RangeOperator => "range operator",
            Feature::RecursivePatterns => "recursive patterns",
            Feature::SwitchExpression => "switch expression",
            Feature::NullCoalescingAssignment => "coalescing assignment",
            Feature::UsingDeclarations => "using declarations",
            Feature::StaticLocalFunctions => "static local functions",
            Feature::AsyncStreams => "async streams",
            Feature::TargetTypedObjectCreation => "target-typed object creation",
            Feature::Records => "records",
            Feature::InitOnlySetters => "init-only setters",
            Feature::TopLevelStatements => "top-level statements",
            Feature::TypePattern => "type pattern",
            Feature::RelationalPattern => "relational pattern",
            Feature::LogicalPatterns => "and, or, and not patterns",
            Feature::StaticAnonymousFunctions => "static anonymous function",
            Feature::RecordStructs => "record structs",
            Feature::GlobalUsingDirective => "global using directive",
            Feature::FileScopedNamespace => "file-scoped namespace",
            Feature::ExtendedPropertyPatterns => "extended property patterns",
            Feature::ListPattern => "list pattern",
            Feature::SlicePattern => "slice pattern",
            Feature::RawStringLiterals => "raw string literals",
            Feature::UnsignedRightShift => "unsigned right shift",
            Feature::RequiredMembers => "required members",
            Feature::FileTypes => "file types",
            Feature::Utf8StringLiterals => "utf8 string literals",
            Feature::CollectionExpressions => "collection expressions",
            Feature::PrimaryConstructors => "primary constructors",
            Feature::RelaxedPartialOrdering => "relaxed partial modifier ordering",
        }
    }

    /// Key in the explicit feature map that force-enables this feature.
    pub const fn flag_name(self) -> &'static str {
        match self {
            Feature::InterpolatedStrings => "interpolated-strings",
            Feature::NullPropagation => "null-propagation",
            Feature::ExpressionBodiedMembers => "expression-bodied-members",
            Feature::Tuples => "tuples",
            Feature::ThrowExpression => "throw-expression",
            Feature::PatternMatching => "pattern-matching",
            Feature::LocalFunctions => "local-functions",
            Feature::RefLocalsReturns => "ref-locals-returns",
            Feature::Discards => "discards",
            Feature::DefaultLiteral => "default-literal",
            Feature::ReadOnlyReferences => "readonly-references",
            Feature::RefStructs => "ref-structs",
            Feature::IndexOperator => "index-operator",
            Feature::RangeOperator => "range-operator",
            Feature::RecursivePatterns => "recursive-patterns",
            Feature::SwitchExpression => "switch-expression",
            Feature::NullCoalescingAssignment => "null-coalescing-assignment",
            Feature::UsingDeclarations => "using-declarations",
            Feature::StaticLocalFunctions => "static-local-functions",
            Feature::AsyncStreams => "async-streams",
            Feature::TargetTypedObjectCreation => "target-typed-new",
            Feature::Records => "records",
            Feature::InitOnlySetters => "init-only-setters",
            Feature::TopLevelStatements => "top-level-statements",
            Feature::TypePattern => "type-pattern",
            Feature::RelationalPattern => "relational-pattern",
            Feature::LogicalPatterns => "logical-patterns",
            Feature::StaticAnonymousFunctions => "static-anonymous-functions",
            Feature::RecordStructs => "record-structs",
            Feature::GlobalUsingDirective => "global-using",
            Feature::FileScopedNamespace => "file-scoped-namespace",
            Feature::ExtendedPropertyPatterns => "extended-property-patterns",
            Feature::ListPattern => "list-pattern",
            Feature::SlicePattern => "slice-pattern",
            Feature::RawStringLiterals => "raw-string-literals",
            Feature::UnsignedRightShift => "unsigned-right-shift",
            Feature::RequiredMembers => "required-members",
            Feature::FileTypes => "file-types",
            Feature::Utf8StringLiterals => "utf8-string-literals",
            Feature::CollectionExpressions => "collection-expressions",
            Feature::PrimaryConstructors => "primary-constructors",
            Feature::RelaxedPartialOrdering => "relaxed-partial-ordering",
        }
    }

    /// Look a feature up by its flag name.
    pub fn from_flag_name(name: &str) -> Option<Feature> {
        Self::ALL.iter().copied().find(|f| f.flag_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_names_are_unique() {
        for (i, a) in Feature::ALL.iter().enumerate() {
            for b in &Feature::ALL[i + 1..] {
                assert_ne!(a.flag_name(), b.flag_name());
                assert_ne!(a.display_name(), b.display_name());
            }
        }
    }

    #[test]
    fn test_from_flag_name() {
        assert_eq!(
            Feature::from_flag_name("list-pattern"),
            Some(Feature::ListPattern)
        );
        assert_eq!(Feature::from_flag_name("nope"), None);
    }

    #[test]
    fn test_known_minimum_versions() {
        assert_eq!(
            Feature::TargetTypedObjectCreation.required_version(),
            LanguageVersion::CSharp9
        );
        assert_eq!(
            Feature::ListPattern.required_version(),
            LanguageVersion::CSharp11
        );
        assert_eq!(
            Feature::CollectionExpressions.required_version(),
            LanguageVersion::CSharp12
        );
        assert_eq!(
            Feature::RelaxedPartialOrdering.required_version(),
            LanguageVersion::Preview
        );
    }
}
