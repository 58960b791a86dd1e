use jcst::parser::parse;
use jcst::{Field, NodeKind, Tree};

fn parse_ok(source: &str) -> Tree {
    let tree = parse(source).expect("Failed to parse");
    assert!(!tree.has_errors(), "unexpected errors: {:?}", tree.errors);
    tree
}

#[test]
fn ambiguity_angle_brackets_are_generics_at_declaration_start() {
    let tree = parse_ok("a<b, c> d;");
    let decls = tree.root.descendants_of_kind(NodeKind::LocalVariableDeclaration);
    assert_eq!(decls.len(), 1);
    let ty = decls[0].field(Field::Type).expect("declared type");
    assert_eq!(ty.kind, NodeKind::GenericType);
}

#[test]
fn ambiguity_angle_brackets_are_relational_in_argument_position() {
    let tree = parse_ok("f(a < b, c > d);");
    let call = tree.root.descendants_of_kind(NodeKind::Call)[0];
    let args: Vec<_> = call
        .field(Field::ArgumentList)
        .expect("arguments")
        .fields(Field::Argument)
        .collect();
    assert_eq!(args.len(), 2);
    assert_eq!(args[0].kind, NodeKind::BinaryExpression);
    assert_eq!(args[0].field(Field::Operator).expect("op").text, "<");
    assert_eq!(args[1].kind, NodeKind::BinaryExpression);
    assert_eq!(args[1].field(Field::Operator).expect("op").text, ">");
    assert!(tree.root.descendants_of_kind(NodeKind::GenericType).is_empty());
}

#[test]
fn ambiguity_bare_comparison_stays_an_expression() {
    let tree = parse_ok("x = a < b;");
    assert!(tree.root.descendants_of_kind(NodeKind::GenericType).is_empty());
    assert_eq!(tree.root.descendants_of_kind(NodeKind::BinaryExpression).len(), 1);
}

#[test]
fn ambiguity_nested_generics_split_shift_tokens() {
    let tree = parse_ok("Map<String, List<Map<K, V>>> deep;");
    assert_eq!(tree.root.descendants_of_kind(NodeKind::GenericType).len(), 3);
    assert_eq!(tree.text(), "Map<String, List<Map<K, V>>> deep;");
}

#[test]
fn ambiguity_shift_operators_survive_outside_types() {
    let tree = parse_ok("x = a >> b; y = c >>> d; z >>= 1;");
    let binaries = tree.root.descendants_of_kind(NodeKind::BinaryExpression);
    assert_eq!(binaries.len(), 2);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::Assignment).len(), 3);
}

#[test]
fn ambiguity_cast_versus_parenthesized() {
    // Reference type followed by an operand: a cast
    let tree = parse_ok("x = (Foo) bar;");
    assert_eq!(tree.root.descendants_of_kind(NodeKind::CastExpression).len(), 1);

    // Followed by a binary operator: parenthesized expression
    let tree = parse_ok("x = (foo) + bar;");
    assert!(tree.root.descendants_of_kind(NodeKind::CastExpression).is_empty());
    assert_eq!(
        tree.root.descendants_of_kind(NodeKind::ParenthesizedExpression).len(),
        1
    );

    // After a primitive the sign belongs to the cast operand
    let tree = parse_ok("x = (int) - y;");
    let casts = tree.root.descendants_of_kind(NodeKind::CastExpression);
    assert_eq!(casts.len(), 1);
    assert_eq!(
        casts[0].field(Field::Value).expect("operand").kind,
        NodeKind::UnaryExpression
    );
}

#[test]
fn ambiguity_cast_of_a_lambda() {
    let tree = parse_ok("r = (Runnable) () -> { };");
    let casts = tree.root.descendants_of_kind(NodeKind::CastExpression);
    assert_eq!(casts.len(), 1);
    assert_eq!(
        casts[0].field(Field::Value).expect("operand").kind,
        NodeKind::Lambda
    );

    // A single-parameter lambda operand parses the same way
    let tree = parse_ok("f = (Function) x -> x;");
    assert_eq!(tree.root.descendants_of_kind(NodeKind::CastExpression).len(), 1);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::Lambda).len(), 1);
}

#[test]
fn ambiguity_intersection_cast() {
    let tree = parse_ok("r = (Runnable & Serializable) task;");
    let casts = tree.root.descendants_of_kind(NodeKind::CastExpression);
    assert_eq!(casts.len(), 1);
    assert_eq!(casts[0].fields(Field::Type).count(), 2);
}

#[test]
fn ambiguity_cast_binds_tighter_than_addition() {
    let tree = parse_ok("x = (int) a + b;");
    let top = tree.root.descendants_of_kind(NodeKind::Assignment)[0]
        .field(Field::Right)
        .expect("rhs");
    assert_eq!(top.kind, NodeKind::BinaryExpression);
    assert_eq!(
        top.field(Field::Left).expect("left").kind,
        NodeKind::CastExpression
    );
}

#[test]
fn ambiguity_parenthesized_lambda_versus_parenthesized_expression() {
    let tree = parse_ok("f((x) -> x, (x));");
    assert_eq!(tree.root.descendants_of_kind(NodeKind::Lambda).len(), 1);
    assert_eq!(
        tree.root.descendants_of_kind(NodeKind::ParenthesizedExpression).len(),
        1
    );
}

#[test]
fn ambiguity_switch_reads_as_expression_when_a_value_is_needed() {
    let tree = parse_ok("int a = switch (k) { default -> 0; }; switch (k) { default -> f(); }");
    let switches = tree.root.descendants_of_kind(NodeKind::SwitchExpression);
    assert_eq!(switches.len(), 2);
    // Both positions produce the same node kind
    assert!(switches[0].kind == switches[1].kind);
}

#[test]
fn ambiguity_constructor_versus_call() {
    // Inside a class body, `Name(...) {` is a constructor
    let tree = parse_ok("class A { A() { } void m() { A(); } }");
    assert_eq!(tree.root.descendants_of_kind(NodeKind::Constructor).len(), 1);
    // The same spelling inside a method body is a call
    assert_eq!(tree.root.descendants_of_kind(NodeKind::Call).len(), 1);
}

#[test]
fn ambiguity_module_only_at_module_position() {
    let tree = parse_ok("open module m.app { }");
    assert_eq!(tree.root.descendants_of_kind(NodeKind::ModuleDeclaration).len(), 1);

    let tree = parse_ok("module = open;");
    assert!(tree.root.descendants_of_kind(NodeKind::ModuleDeclaration).is_empty());
    assert_eq!(tree.root.descendants_of_kind(NodeKind::Assignment).len(), 1);
}
