use jcst::parser::parse;
use jcst::{Field, Node, NodeKind, Tree};

fn parse_ok(source: &str) -> Tree {
    let tree = parse(source).expect("Failed to parse");
    assert!(!tree.has_errors(), "unexpected errors: {:?}", tree.errors);
    tree
}

fn statements(tree: &Tree) -> &[Node] {
    &tree.root.field(Field::StatementList).expect("statement list").children
}

#[test]
fn statements_if_chain_is_flat() {
    let tree = parse_ok("if (a) x(); else if (b) y(); else if (c) z(); else w();");
    let if_nodes = tree.root.descendants_of_kind(NodeKind::If);
    assert_eq!(if_nodes.len(), 1, "the chain must stay one node");
    let chain = if_nodes[0];
    assert_eq!(chain.field_items(Field::ElseIfClauseList).len(), 2);
    let else_clause = chain.field(Field::ElseClauseOptional).expect("else slot");
    assert_eq!(else_clause.kind, NodeKind::ElseClause);
}

#[test]
fn statements_if_without_else_keeps_the_slot() {
    let tree = parse_ok("if (a) x();");
    let chain = tree.root.descendants_of_kind(NodeKind::If)[0];
    assert!(chain.field(Field::ElseIfClauseList).expect("list slot").is_absent());
    assert!(chain.field(Field::ElseClauseOptional).expect("else slot").is_placeholder());
}

#[test]
fn statements_dangling_else_binds_to_nearest_if() {
    let tree = parse_ok("if (a) if (b) f(); else g();");
    let outer = tree.root.descendants_of_kind(NodeKind::If)[0];
    assert!(outer.field(Field::ElseClauseOptional).expect("outer else").is_placeholder());
    let clause = outer.children.first().expect("if clause");
    assert_eq!(clause.kind, NodeKind::IfClause);
    let inner = clause.field(Field::Body).expect("clause body");
    assert_eq!(inner.kind, NodeKind::If);
    assert_eq!(
        inner
            .field(Field::ElseClauseOptional)
            .expect("inner else")
            .kind,
        NodeKind::ElseClause
    );
}

#[test]
fn statements_while_and_do_while() {
    let tree = parse_ok("while (a) { b(); } do c(); while (d);");
    assert_eq!(tree.root.descendants_of_kind(NodeKind::While).len(), 1);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::DoStatement).len(), 1);
}

#[test]
fn statements_basic_for_materializes_every_slot() {
    let tree = parse_ok("for (int i = 0; i < n; i++) sum += i;");
    let for_clause = tree.root.descendants_of_kind(NodeKind::ForClause)[0];
    assert_eq!(
        for_clause.field(Field::BlockInitializerOptional).expect("init").kind,
        NodeKind::LocalVariableDeclaration
    );
    assert_eq!(
        for_clause.field(Field::ConditionOptional).expect("cond").kind,
        NodeKind::BinaryExpression
    );
    assert!(for_clause.field(Field::BlockUpdateOptional).is_some());
    assert!(for_clause.field(Field::ForBody).is_some());
}

#[test]
fn statements_empty_for_uses_placeholders() {
    let tree = parse_ok("for (;;) { }");
    let for_clause = tree.root.descendants_of_kind(NodeKind::ForClause)[0];
    assert!(for_clause.field(Field::BlockInitializerOptional).expect("init").is_placeholder());
    assert!(for_clause.field(Field::ConditionOptional).expect("cond").is_placeholder());
    assert!(for_clause.field(Field::BlockUpdateOptional).expect("update").is_placeholder());
}

#[test]
fn statements_for_each() {
    let tree = parse_ok("for (final String s : items) use(s);");
    let clause = tree.root.descendants_of_kind(NodeKind::ForEachClause)[0];
    let iterator = clause.field(Field::BlockIterator).expect("iterator");
    assert_eq!(iterator.kind, NodeKind::VariableDeclarator);
    assert_eq!(iterator.field(Field::Name).expect("name").text, "s");
    assert_eq!(
        clause.field(Field::BlockCollection).expect("collection").kind,
        NodeKind::Identifier
    );
}

#[test]
fn statements_switch_in_statement_position() {
    let tree = parse_ok("switch (x) { case 1: f(); break; case 2: default: g(); }");
    let switches = tree.root.descendants_of_kind(NodeKind::SwitchExpression);
    assert_eq!(switches.len(), 1);
    let groups = tree.root.descendants_of_kind(NodeKind::SwitchBlockStatementGroup);
    assert_eq!(groups.len(), 2);
    // The second group stacks two labels
    assert_eq!(groups[1].descendants_of_kind(NodeKind::SwitchLabel).len(), 2);
}

#[test]
fn statements_plain_try_catch_finally_shape() {
    let tree = parse_ok("try { f(); } catch (A a) { } catch (B | C e) { } finally { g(); }");
    let try_node = tree.root.descendants_of_kind(NodeKind::Try)[0];
    assert_eq!(try_node.field_items(Field::CatchList).len(), 2);
    assert_eq!(
        try_node.field(Field::FinallyClauseOptional).expect("finally").kind,
        NodeKind::FinallyClause
    );
    // Multi-catch keeps its alternatives inside one catch type
    let multi = try_node.field_items(Field::CatchList)[1]
        .descendants_of_kind(NodeKind::CatchType)[0]
        .clone();
    assert!(multi.source_text().contains('|'));
}

#[test]
fn statements_try_without_finally_keeps_the_slot() {
    let tree = parse_ok("try { f(); } catch (E e) { }");
    let try_node = tree.root.descendants_of_kind(NodeKind::Try)[0];
    assert!(try_node.field(Field::FinallyClauseOptional).expect("slot").is_placeholder());
}

#[test]
fn statements_try_with_resources() {
    let tree = parse_ok(
        "try (Reader in = open(); out) { use(in); } catch (IOException e) { } finally { done(); }",
    );
    let try_node = tree.root.descendants_of_kind(NodeKind::TryWithResourcesStatement)[0];
    let resources = try_node.field(Field::Resources).expect("resources");
    assert_eq!(resources.kind, NodeKind::ResourceSpecification);
    let items = resources.descendants_of_kind(NodeKind::Resource);
    assert_eq!(items.len(), 2);
    assert!(items[0].field(Field::AssignmentValue).is_some());
    assert!(items[1].field(Field::AssignmentValue).is_none());
    assert_eq!(try_node.field_items(Field::CatchList).len(), 1);
    assert!(try_node.field(Field::FinallyClauseOptional).is_some());
}

#[test]
fn statements_jumps_and_labels() {
    let tree = parse_ok(
        "outer: for (;;) { if (a) break outer; if (b) continue outer; return x; }",
    );
    assert_eq!(tree.root.descendants_of_kind(NodeKind::LabeledStatement).len(), 1);
    let brk = tree.root.descendants_of_kind(NodeKind::BreakStatement)[0];
    assert_eq!(brk.field(Field::Label).expect("label").text, "outer");
    assert_eq!(tree.root.descendants_of_kind(NodeKind::ContinueStatement).len(), 1);
    let ret = tree.root.descendants_of_kind(NodeKind::Return)[0];
    assert_eq!(ret.field(Field::ReturnValue).expect("value").kind, NodeKind::Identifier);
}

#[test]
fn statements_bare_return_keeps_the_value_slot() {
    let tree = parse_ok("return;");
    let ret = tree.root.descendants_of_kind(NodeKind::Return)[0];
    assert!(ret.field(Field::ReturnValue).expect("slot").is_placeholder());
}

#[test]
fn statements_throw_assert_synchronized() {
    let tree = parse_ok(
        "throw new IllegalStateException(msg); assert x > 0 : \"bad\"; synchronized (lock) { f(); }",
    );
    assert_eq!(tree.root.descendants_of_kind(NodeKind::Throw).len(), 1);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::AssertStatement).len(), 1);
    assert_eq!(tree.root.descendants_of_kind(NodeKind::SynchronizedStatement).len(), 1);
}

#[test]
fn statements_local_declarations_share_one_declarator_shape() {
    let tree = parse_ok("int a, b = 1, c[] = { 2 };");
    let decl = tree.root.descendants_of_kind(NodeKind::LocalVariableDeclaration)[0];
    let declarators: Vec<_> = decl
        .field(Field::AssignmentList)
        .expect("declarators")
        .children
        .iter()
        .filter(|c| c.kind == NodeKind::VariableDeclarator)
        .collect();
    assert_eq!(declarators.len(), 3);
    // Every declarator carries the same slots; absence is a placeholder
    assert!(declarators[0].field(Field::AssignmentValue).expect("slot").is_placeholder());
    assert!(!declarators[1].field(Field::AssignmentValue).expect("slot").is_placeholder());
    assert!(declarators[0].field(Field::Dimensions).expect("slot").is_placeholder());
    assert!(!declarators[2].field(Field::Dimensions).expect("slot").is_placeholder());
    assert_eq!(
        declarators[2].field(Field::AssignmentValue).expect("init").kind,
        NodeKind::ArrayInitializer
    );
}

#[test]
fn statements_module_declaration() {
    let source = r#"
module com.app {
    requires transitive java.sql;
    requires static java.compiler;
    exports com.app.api to friend.one, friend.two;
    uses com.app.spi.Hook;
    provides com.app.spi.Hook with com.app.impl.DefaultHook;
}
"#;
    let tree = parse_ok(source);
    let modules = tree.root.descendants_of_kind(NodeKind::ModuleDeclaration);
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].descendants_of_kind(NodeKind::ModuleDirective).len(), 5);
    assert!(!modules[0].descendants_of_kind(NodeKind::RequiresModifier).is_empty());
}

#[test]
fn statements_open_and_module_stay_identifiers_elsewhere() {
    let tree = parse_ok("int open = 1; int module = open + 1;");
    assert!(tree.root.descendants_of_kind(NodeKind::ModuleDeclaration).is_empty());
    assert_eq!(
        tree.root.descendants_of_kind(NodeKind::LocalVariableDeclaration).len(),
        2
    );
}

#[test]
fn statements_top_level_script_mode() {
    let tree = parse_ok("f(); int x = 1; { g(); }");
    let stmts = statements(&tree);
    assert_eq!(stmts.len(), 3);
    assert_eq!(stmts[0].kind, NodeKind::ExpressionStatement);
    assert_eq!(stmts[1].kind, NodeKind::LocalVariableDeclaration);
    assert_eq!(stmts[2].kind, NodeKind::BraceEnclosedBody);
}
