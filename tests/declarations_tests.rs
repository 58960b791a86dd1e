use jcst::parser::parse;
use jcst::{Field, Node, NodeKind, Tree};

fn parse_ok(source: &str) -> Tree {
    let tree = parse(source).expect("Failed to parse");
    assert!(!tree.has_errors(), "unexpected errors: {:?}", tree.errors);
    tree
}

fn first_type(tree: &Tree) -> &Node {
    tree.root
        .field(Field::TypeDeclarationList)
        .expect("type list")
        .children
        .first()
        .expect("a type declaration")
}

#[test]
fn declarations_package_and_imports() {
    let source = "package com.example.app;\nimport java.util.List;\nimport static java.lang.Math.max;\nimport java.io.*;\nclass A { }\n";
    let tree = parse_ok(source);
    let package = tree.root.field(Field::PackageOptional).expect("package slot");
    assert_eq!(package.kind, NodeKind::Package);
    let imports = tree.root.field_items(Field::ImportList);
    assert_eq!(imports.len(), 3);
    assert!(!imports[2].descendants_of_kind(NodeKind::Asterisk).is_empty());
}

#[test]
fn declarations_missing_package_is_a_placeholder() {
    let tree = parse_ok("class A { }");
    assert!(tree.root.field(Field::PackageOptional).expect("slot").is_placeholder());
    assert!(tree.root.field(Field::ImportList).expect("imports").is_absent());
}

#[test]
fn declarations_class_shape_is_uniform() {
    let tree = parse_ok("public final class A<T extends Number> extends Base implements I, J { }");
    let class = first_type(&tree);
    assert_eq!(class.kind, NodeKind::Class);
    assert_eq!(class.field(Field::Name).expect("name").text, "A");
    assert_eq!(class.field_items(Field::ModifierList).len(), 2);
    assert_eq!(
        class.field(Field::TypeParameterList).expect("params").kind,
        NodeKind::TypeParameterList
    );
    assert!(class.field(Field::ExtendsOptional).is_some());
    assert!(class.field(Field::ImplementsListOptional).is_some());

    // A bare class keeps every slot, as placeholders
    let bare = parse_ok("class B { }");
    let class = first_type(&bare);
    assert!(class.field(Field::ModifierList).expect("modifiers").is_absent());
    assert!(class.field(Field::TypeParameterList).expect("params").is_placeholder());
    assert!(class.field(Field::ExtendsOptional).expect("extends").is_placeholder());
    assert!(class.field(Field::ImplementsListOptional).expect("implements").is_placeholder());
}

#[test]
fn declarations_members_fields_methods_constructors() {
    let source = r#"
class Point {
    private int x, y;
    static int count;

    Point(int x, int y) {
        this.x = x;
        this.y = y;
    }

    int getX() { return x; }

    <T> T id(T value) { return value; }

    void setAll(int... values) { }

    static { count = 0; }
}
"#;
    let tree = parse_ok(source);
    let class = first_type(&tree);
    let members = class.field(Field::Body).expect("body").field_items(Field::ClassMemberList);
    assert_eq!(members.iter().filter(|m| m.kind == NodeKind::Property).count(), 2);
    assert_eq!(members.iter().filter(|m| m.kind == NodeKind::Method).count(), 3);
    assert_eq!(members.iter().filter(|m| m.kind == NodeKind::Constructor).count(), 1);
    assert_eq!(
        members.iter().filter(|m| m.kind == NodeKind::StaticInitializer).count(),
        1
    );
    assert_eq!(tree.root.descendants_of_kind(NodeKind::SpreadParameter).len(), 1);
    // The generic method keeps its declared type parameters
    let generic = members
        .iter()
        .find(|m| m.kind == NodeKind::Method && m.field(Field::Name).map(|n| n.text.as_str()) == Some("id"))
        .expect("method id");
    assert_eq!(
        generic.field(Field::TypeParameterList).expect("slot").kind,
        NodeKind::TypeParameterList
    );
}

#[test]
fn declarations_constructor_delegation() {
    let source = "class A { A() { this(0); } A(int x) { super(); f(); } }";
    let tree = parse_ok(source);
    let delegations = tree.root.descendants_of_kind(NodeKind::ExplicitConstructorInvocation);
    assert_eq!(delegations.len(), 2);
}

#[test]
fn declarations_interface_members_are_constants() {
    let source = r#"
interface Shape extends Drawable, Comparable<Shape> {
    int SIDES = 4;
    double area();
    default String name() { return "shape"; }
}
"#;
    let tree = parse_ok(source);
    let iface = first_type(&tree);
    assert_eq!(iface.kind, NodeKind::Interface);
    let members = iface.field(Field::Body).expect("body").field_items(Field::InterfaceMemberList);
    assert_eq!(
        members.iter().filter(|m| m.kind == NodeKind::ConstantDeclaration).count(),
        1
    );
    assert_eq!(members.iter().filter(|m| m.kind == NodeKind::Method).count(), 2);
}

#[test]
fn declarations_enum_with_bodies_and_members() {
    let source = r#"
enum Planet implements Named {
    MERCURY(3.3e23),
    EARTH(5.9e24) { int rank() { return 1; } };

    private final double mass;
    Planet(double mass) { this.mass = mass; }
}
"#;
    let tree = parse_ok(source);
    let enum_decl = first_type(&tree);
    assert_eq!(enum_decl.kind, NodeKind::Enum);
    let constants = tree.root.descendants_of_kind(NodeKind::EnumConstant);
    assert_eq!(constants.len(), 2);
    assert!(constants[0].field(Field::Body).expect("slot").is_placeholder());
    assert!(!constants[1].field(Field::Body).expect("slot").is_placeholder());
    assert_eq!(tree.root.descendants_of_kind(NodeKind::EnumBodyDeclarations).len(), 1);
}

#[test]
fn declarations_record() {
    let tree = parse_ok("record Pair<K, V>(K key, V value) implements Map.Entry { }");
    let records = tree.root.descendants_of_kind(NodeKind::RecordDeclaration);
    assert_eq!(records.len(), 1);
    let record = records[0];
    assert_eq!(record.field(Field::Name).expect("name").text, "Pair");
    let params = record.field(Field::ParameterList).expect("components");
    assert_eq!(
        params.fields(Field::Parameter).count(),
        2
    );
}

#[test]
fn declarations_annotation_type() {
    let source = r#"
@interface Timed {
    String unit() default "ms";
    int[] buckets() default { 1, 10, 100 };
}
"#;
    let tree = parse_ok(source);
    let decls = tree.root.descendants_of_kind(NodeKind::AnnotationTypeDeclaration);
    assert_eq!(decls.len(), 1);
    let elements = decls[0].descendants_of_kind(NodeKind::AnnotationTypeElementDeclaration);
    assert_eq!(elements.len(), 2);
    assert_eq!(
        decls[0].descendants_of_kind(NodeKind::ElementValueArrayInitializer).len(),
        1
    );
}

#[test]
fn declarations_annotations_marker_and_with_arguments() {
    let source = r#"
@Deprecated
@SuppressWarnings("unchecked")
@Schedule(day = "Mon", hour = 9)
class A {
    @Override public String toString() { return ""; }
}
"#;
    let tree = parse_ok(source);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::MarkerAnnotation).len(), 2);
    let annotations = tree.root.descendants_of_kind(NodeKind::Annotation);
    assert_eq!(annotations.len(), 2);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::ElementValuePair).len(), 2);
    let class = first_type(&tree);
    assert_eq!(class.field_items(Field::DecoratorList).len(), 3);
}

#[test]
fn declarations_nested_and_local_types() {
    let source = r#"
class Outer {
    static class Nested { }
    void m() {
        class Local { }
        Object o = new Object() { };
    }
}
"#;
    let tree = parse_ok(source);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::Class).len(), 3);
    assert_eq!(
        tree.root.descendants_of_kind(NodeKind::ObjectCreationExpression).len(),
        1
    );
}
