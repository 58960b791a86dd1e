use jcst::parser::parse;
use jcst::{Field, Node, NodeKind, Tree};

fn parse_ok(source: &str) -> Tree {
    let tree = parse(source).expect("Failed to parse");
    assert!(!tree.has_errors(), "unexpected errors: {:?}", tree.errors);
    tree
}

fn first_statement(tree: &Tree) -> &Node {
    tree.root
        .field(Field::StatementList)
        .expect("statement list")
        .children
        .first()
        .expect("at least one statement")
}

/// The expression carried by the first expression statement
fn first_expression(tree: &Tree) -> &Node {
    first_statement(tree).field(Field::Value).expect("expression value")
}

#[test]
fn expressions_multiplication_binds_tighter_than_addition() {
    let tree = parse_ok("a + b * c;");
    let expr = first_expression(&tree);
    assert_eq!(expr.kind, NodeKind::BinaryExpression);
    assert_eq!(expr.field(Field::Operator).expect("operator").text, "+");
    let right = expr.field(Field::Right).expect("right");
    assert_eq!(right.kind, NodeKind::BinaryExpression);
    assert_eq!(right.field(Field::Operator).expect("operator").text, "*");
}

#[test]
fn expressions_subtraction_is_left_associative() {
    let tree = parse_ok("a - b - c;");
    let expr = first_expression(&tree);
    assert_eq!(expr.field(Field::Operator).expect("operator").text, "-");
    assert_eq!(
        expr.field(Field::Left).expect("left").kind,
        NodeKind::BinaryExpression
    );
    assert_eq!(expr.field(Field::Right).expect("right").kind, NodeKind::Identifier);
}

#[test]
fn expressions_assignment_is_right_associative() {
    let tree = parse_ok("a = b = c;");
    let expr = first_expression(&tree);
    assert_eq!(expr.kind, NodeKind::Assignment);
    assert_eq!(
        expr.field(Field::Right).expect("right").kind,
        NodeKind::Assignment
    );
}

#[test]
fn expressions_compound_assignment_operators() {
    for op in ["+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", ">>>="] {
        let source = format!("a {} b;", op);
        let tree = parse_ok(&source);
        let expr = first_expression(&tree);
        assert_eq!(expr.kind, NodeKind::Assignment, "operator {}", op);
        assert_eq!(expr.field(Field::Operator).expect("operator").text, op);
    }
}

#[test]
fn expressions_ternary_chains_to_the_right() {
    let tree = parse_ok("a ? b : c ? d : e;");
    let expr = first_expression(&tree);
    assert_eq!(expr.kind, NodeKind::TernaryExpression);
    assert_eq!(
        expr.field(Field::Alternative).expect("alternative").kind,
        NodeKind::TernaryExpression
    );
}

#[test]
fn expressions_unary_and_update() {
    let tree = parse_ok("x = -a + !b; i++; --j;");
    let statements = tree.root.field(Field::StatementList).expect("statements");
    assert_eq!(tree.root.descendants_of_kind(NodeKind::UnaryExpression).len(), 2);
    let updates = tree.root.descendants_of_kind(NodeKind::UpdateExpression);
    assert_eq!(updates.len(), 2);
    assert_eq!(statements.children.len(), 3);
}

#[test]
fn expressions_call_field_access_and_array_access_chain() {
    let tree = parse_ok("a.b.c(1, 2)[i].d;");
    let expr = first_expression(&tree);
    assert_eq!(expr.kind, NodeKind::FieldAccess);
    let array = expr.field(Field::Object).expect("object");
    assert_eq!(array.kind, NodeKind::ArrayAccess);
    let call = array.field(Field::Array).expect("array");
    assert_eq!(call.kind, NodeKind::Call);
    assert_eq!(call.field(Field::ArgumentList).expect("args").fields(Field::Argument).count(), 2);
}

#[test]
fn expressions_generic_method_invocation() {
    let tree = parse_ok("obj.<String>get(0);");
    let expr = first_expression(&tree);
    assert_eq!(expr.kind, NodeKind::Call);
    assert!(!expr.descendants_of_kind(NodeKind::TypeArguments).is_empty());
}

#[test]
fn expressions_method_references() {
    let tree = parse_ok("f(String::valueOf, List<String>::size, x::apply, Foo::new);");
    let refs = tree.root.descendants_of_kind(NodeKind::MethodReference);
    assert_eq!(refs.len(), 4);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::GenericType).len(), 1);
}

#[test]
fn expressions_class_literals() {
    let tree = parse_ok("f(String.class, int.class, int[].class, void.class);");
    let literals = tree.root.descendants_of_kind(NodeKind::ClassLiteral);
    assert_eq!(literals.len(), 4);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::ArrayType).len(), 1);
}

#[test]
fn expressions_object_creation_with_anonymous_body() {
    let tree = parse_ok("x = new ArrayList<>(); y = new Runnable() { };");
    let creations = tree.root.descendants_of_kind(NodeKind::ObjectCreationExpression);
    assert_eq!(creations.len(), 2);
    assert!(creations[0].field(Field::Body).expect("slot").is_placeholder());
    assert!(!creations[1].field(Field::Body).expect("slot").is_placeholder());
}

#[test]
fn expressions_qualified_inner_class_creation() {
    let tree = parse_ok("x = outer.new Inner(1);");
    let creation = tree.root.descendants_of_kind(NodeKind::ObjectCreationExpression);
    assert_eq!(creation.len(), 1);
    assert!(creation[0].field(Field::Object).is_some());
}

#[test]
fn expressions_array_creation_forms() {
    let tree = parse_ok("a = new int[3][2]; b = new int[][] { { 1 }, { 2 } };");
    let creations = tree.root.descendants_of_kind(NodeKind::ArrayCreationExpression);
    assert_eq!(creations.len(), 2);
    assert_eq!(creations[0].descendants_of_kind(NodeKind::DimensionsExpr).len(), 2);
    assert!(!creations[1].descendants_of_kind(NodeKind::ArrayInitializer).is_empty());
}

#[test]
fn expressions_lambdas() {
    let tree = parse_ok("f(x -> x + 1, (a, b) -> a * b, () -> 0, (int n) -> { return n; });");
    let lambdas = tree.root.descendants_of_kind(NodeKind::Lambda);
    assert_eq!(lambdas.len(), 4);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::InferredParameters).len(), 1);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::FormalParameters).len(), 2);
}

#[test]
fn expressions_instanceof_with_binding() {
    let tree = parse_ok("b = o instanceof String s && s.isEmpty();");
    let inst = tree.root.descendants_of_kind(NodeKind::InstanceofExpression);
    assert_eq!(inst.len(), 1);
    assert_eq!(inst[0].field(Field::Name).expect("binding").text, "s");
}

#[test]
fn expressions_switch_expression_with_rules() {
    let tree = parse_ok("int y = switch (k) { case 1, 2 -> 10; default -> { yield 0; } };");
    let switches = tree.root.descendants_of_kind(NodeKind::SwitchExpression);
    assert_eq!(switches.len(), 1);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::SwitchRule).len(), 2);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::YieldStatement).len(), 1);
}

#[test]
fn expressions_shift_and_relational_levels() {
    let tree = parse_ok("r = a >> 2 < b << 1;");
    let expr = tree.root.descendants_of_kind(NodeKind::Assignment)[0]
        .field(Field::Right)
        .expect("rhs")
        .clone();
    // `<` is the loosest operator here, so it owns the tree
    assert_eq!(expr.field(Field::Operator).expect("operator").text, "<");
}
