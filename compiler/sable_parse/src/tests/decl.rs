use pretty_assertions::assert_eq;

use sable_ir::SyntaxKind as K;

use super::{child_kinds, codes, count, first, has, member, top_level, tree};

#[test]
fn usings_namespace_and_class() {
    let tree = tree(
        "using System;\n\
         using static System.Math;\n\
         using IO = System.IO;\n\
         \n\
         namespace App\n\
         {\n\
         \x20   public class Program { }\n\
         }\n",
    );
    assert_eq!(
        top_level(&tree),
        [
            K::UsingDirective,
            K::UsingDirective,
            K::UsingDirective,
            K::NamespaceDeclaration
        ]
    );
    assert!(tree.diagnostics().is_empty());
    let namespace = first(tree.root(), K::NamespaceDeclaration);
    assert_eq!(
        child_kinds(namespace),
        [K::IdentifierName, K::ClassDeclaration]
    );
}

#[test]
fn file_scoped_namespace_owns_what_follows() {
    let tree = tree("namespace App.Models;\n\nclass A { }\nclass B { }\n");
    assert_eq!(top_level(&tree), [K::FileScopedNamespaceDeclaration]);
    let namespace = first(tree.root(), K::FileScopedNamespaceDeclaration);
    assert_eq!(
        child_kinds(namespace),
        [K::QualifiedName, K::ClassDeclaration, K::ClassDeclaration]
    );
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn extern_alias_and_global_using() {
    let tree = tree("extern alias Lib;\nglobal using System;\n");
    assert_eq!(
        top_level(&tree),
        [K::ExternAliasDirective, K::UsingDirective]
    );
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn using_after_member_is_reported() {
    let tree = tree("class C { }\nusing System;\n");
    assert_eq!(top_level(&tree), [K::ClassDeclaration, K::UsingDirective]);
    assert_eq!(codes(&tree.diagnostics()), ["CS1529"]);
}

#[test]
fn class_with_type_parameters_bases_and_constraints() {
    let parsed = member("class C<T> : Base, IThing where T : class, new() { }");
    let node = parsed.node();
    assert_eq!(node.kind(), K::ClassDeclaration);
    assert_eq!(
        child_kinds(node),
        [K::TypeParameterList, K::BaseList, K::TypeParameterConstraintClause]
    );
    assert_eq!(count(node, K::SimpleBaseType), 2);
    assert!(has(node, K::ClassConstraint));
    assert!(has(node, K::ConstructorConstraint));
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn records_enums_and_delegates() {
    let parsed = member("public record Person(string Name, int Age);");
    assert_eq!(parsed.node().kind(), K::RecordDeclaration);
    assert_eq!(count(parsed.node(), K::Parameter), 2);

    assert_eq!(member("record struct P(int X);").node().kind(), K::RecordStructDeclaration);

    let parsed = member("enum Color : byte { Red, Green = 2, }");
    assert_eq!(parsed.node().kind(), K::EnumDeclaration);
    assert_eq!(count(parsed.node(), K::EnumMemberDeclaration), 2);
    assert!(parsed.diagnostics().is_empty());

    let parsed = member("delegate void Handler(object sender);");
    assert_eq!(parsed.node().kind(), K::DelegateDeclaration);
}

#[test]
fn fields_methods_and_constructors() {
    let parsed = member(
        "class C {\n\
         \x20   private readonly int count = 0;\n\
         \x20   public C(int n) : base(n) { }\n\
         \x20   ~C() { }\n\
         \x20   public static T Id<T>(T value) where T : struct => value;\n\
         \x20   void IDisposable.Dispose() { }\n\
         }",
    );
    let node = parsed.node();
    assert_eq!(
        child_kinds(node),
        [
            K::FieldDeclaration,
            K::ConstructorDeclaration,
            K::DestructorDeclaration,
            K::MethodDeclaration,
            K::MethodDeclaration
        ]
    );
    assert!(has(node, K::BaseConstructorInitializer));
    assert!(has(node, K::ExplicitInterfaceSpecifier));
    assert!(has(node, K::StructConstraint));
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn properties_and_indexers() {
    let parsed = member("public int X { get; private set; } = 1;");
    let node = parsed.node();
    assert_eq!(node.kind(), K::PropertyDeclaration);
    let accessors = first(node, K::AccessorList);
    assert_eq!(
        child_kinds(accessors),
        [K::GetAccessorDeclaration, K::SetAccessorDeclaration]
    );
    assert!(node.child_node(K::EqualsValueClause).is_some());
    assert!(parsed.diagnostics().is_empty());

    let parsed = member("public string Name => name;");
    assert_eq!(parsed.node().kind(), K::PropertyDeclaration);
    assert!(parsed.node().child_node(K::ArrowExpressionClause).is_some());

    let parsed = member("public int Y { get; init; }");
    assert!(has(parsed.node(), K::InitAccessorDeclaration));

    let parsed = member("public int this[int i] { get => i; }");
    assert_eq!(parsed.node().kind(), K::IndexerDeclaration);
    assert!(parsed.node().child_node(K::BracketedParameterList).is_some());
}

#[test]
fn operators() {
    let parsed = member("public static C operator +(C a, C b) => a;");
    assert_eq!(parsed.node().kind(), K::OperatorDeclaration);
    assert!(parsed.diagnostics().is_empty());

    let parsed = member("public static C operator >>(C a, int b) => a;");
    assert_eq!(parsed.node().kind(), K::OperatorDeclaration);
    assert!(parsed
        .node()
        .child_token(K::GreaterThanGreaterThanToken)
        .is_some());

    let parsed = member("public static implicit operator int(C c) => 0;");
    assert_eq!(parsed.node().kind(), K::ConversionOperatorDeclaration);
}

#[test]
fn invalid_operator_token_reports_plus_expected() {
    let parsed = member("public static C operator ?(C a) => a;");
    assert_eq!(parsed.node().kind(), K::OperatorDeclaration);
    assert!(codes(&parsed.diagnostics()).contains(&"CS1003"));
}

#[test]
fn events() {
    let parsed = member("public event EventHandler Changed;");
    assert_eq!(parsed.node().kind(), K::EventFieldDeclaration);

    let parsed = member("event EventHandler Changed { add { } remove { } }");
    let node = parsed.node();
    assert_eq!(node.kind(), K::EventDeclaration);
    let accessors = first(node, K::AccessorList);
    assert_eq!(
        child_kinds(accessors),
        [K::AddAccessorDeclaration, K::RemoveAccessorDeclaration]
    );
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn unknown_accessors() {
    let parsed = member("int P { fetch; }");
    assert!(has(parsed.node(), K::UnknownAccessorDeclaration));
    assert_eq!(codes(&parsed.diagnostics()), ["CS1014"]);

    let parsed = member("event EventHandler E { get; }");
    assert_eq!(codes(&parsed.diagnostics()), ["CS1055"]);
}

#[test]
fn accessor_without_body() {
    let parsed = member("int P { get }");
    assert_eq!(codes(&parsed.diagnostics()), ["CS1043"]);
}

#[test]
fn attributes_on_members_and_assembly() {
    let tree = tree("[assembly: Version(\"1.0\")]\n[Serializable]\nclass C { [Obsolete] void M() { } }\n");
    assert_eq!(top_level(&tree), [K::AttributeList, K::ClassDeclaration]);
    assert!(has(tree.root(), K::AttributeTargetSpecifier));
    assert_eq!(count(tree.root(), K::AttributeList), 3);
    assert!(has(tree.root(), K::AttributeArgumentList));
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn top_level_statements() {
    let tree = tree("using System;\nConsole.WriteLine(1);\nawait Task.Delay(1);\n");
    assert_eq!(
        top_level(&tree),
        [K::UsingDirective, K::GlobalStatement, K::GlobalStatement]
    );
    assert!(has(tree.root(), K::AwaitExpression));
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn statement_after_type_declaration_is_reported() {
    let tree = tree("class C { }\nSystem.Console.WriteLine();\n");
    assert_eq!(top_level(&tree), [K::ClassDeclaration, K::GlobalStatement]);
    assert_eq!(codes(&tree.diagnostics()), ["CS8803"]);
}

#[test]
fn partial_before_other_modifiers_needs_preview() {
    let parsed = member("partial public class C { }");
    assert_eq!(parsed.node().kind(), K::ClassDeclaration);
    assert_eq!(codes(&parsed.diagnostics()), ["CS8652"]);
}

#[test]
fn partial_enum_is_reported() {
    let parsed = member("partial enum E { A }");
    assert_eq!(parsed.node().kind(), K::EnumDeclaration);
    assert_eq!(codes(&parsed.diagnostics()), ["CS0267"]);
}

#[test]
fn duplicate_modifier_is_reported() {
    let parsed = member("public public int x;");
    assert_eq!(parsed.node().kind(), K::FieldDeclaration);
    assert_eq!(codes(&parsed.diagnostics()), ["CS1004"]);
}
