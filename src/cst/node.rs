use crate::parser::error::ParseError;
use crate::parser::lexer::Trivia;
use crate::parser::span::{HasSpan, Location, Span};

/// Concrete node kinds.
///
/// Consumers are expected to match on the supertype predicates
/// (`is_expression`, `is_statement`, ...) rather than exhaustively on
/// variants. `List`, `Placeholder` and `Error` are structural kinds;
/// `Token` is the kind of anonymous keyword/punctuation leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    // Structural
    Program,
    List,
    Placeholder,
    Error,
    Token,

    // Leaves
    Identifier,
    TypeIdentifier,
    DecimalIntegerLiteral,
    HexIntegerLiteral,
    OctalIntegerLiteral,
    BinaryIntegerLiteral,
    DecimalFloatingPointLiteral,
    HexFloatingPointLiteral,
    True,
    False,
    CharacterLiteral,
    StringLiteral,
    NullLiteral,
    This,
    Super,
    Asterisk,
    Modifier,
    RequiresModifier,

    // Types
    VoidType,
    IntegralType,
    FloatingPointType,
    BooleanType,
    ScopedTypeIdentifier,
    GenericType,
    ArrayType,
    AnnotatedType,
    TypeArguments,
    Wildcard,
    Dimensions,
    DimensionsExpr,
    TypeParameterList,
    TypeParameter,
    TypeBound,

    // Expressions
    Assignment,
    BinaryExpression,
    InstanceofExpression,
    Lambda,
    InferredParameters,
    TernaryExpression,
    UnaryExpression,
    UpdateExpression,
    CastExpression,
    SwitchExpression,
    ParenthesizedExpression,
    ObjectCreationExpression,
    FieldAccess,
    ArrayAccess,
    Call,
    CallIdentifier,
    Arguments,
    MethodReference,
    ArrayCreationExpression,
    ArrayInitializer,
    ClassLiteral,
    ScopedIdentifier,

    // Switch internals
    SwitchBlock,
    SwitchBlockStatementGroup,
    SwitchRule,
    SwitchLabel,

    // Statements
    ExpressionStatement,
    LabeledStatement,
    If,
    IfClause,
    ElseIfClause,
    ElseClause,
    While,
    ForClause,
    ForEachClause,
    BlockInitializer,
    BraceEnclosedBody,
    EmptyStatement,
    AssertStatement,
    DoStatement,
    BreakStatement,
    ContinueStatement,
    Return,
    YieldStatement,
    SynchronizedStatement,
    LocalVariableDeclaration,
    Throw,
    Try,
    TryClause,
    Catch,
    CatchParameter,
    CatchType,
    FinallyClause,
    TryWithResourcesStatement,
    ResourceSpecification,
    Resource,

    // Declarations
    Package,
    Import,
    ModuleDeclaration,
    ModuleBody,
    ModuleDirective,
    Class,
    Interface,
    Enum,
    EnumBody,
    EnumConstant,
    EnumBodyDeclarations,
    ClassBody,
    InterfaceBody,
    ConstantDeclaration,
    Property,
    RecordDeclaration,
    AnnotationTypeDeclaration,
    AnnotationTypeBody,
    AnnotationTypeElementDeclaration,
    StaticInitializer,
    Constructor,
    ConstructorBody,
    ExplicitConstructorInvocation,
    Method,
    FormalParameters,
    FormalParameter,
    SpreadParameter,
    ReceiverParameter,
    VariableDeclarator,
    Throws,
    Annotation,
    MarkerAnnotation,
    AnnotationArgumentList,
    ElementValuePair,
    ElementValueArrayInitializer,
}

impl NodeKind {
    /// The grammar-level rule name for this kind
    pub fn name(&self) -> &'static str {
        use NodeKind::*;
        match self {
            Program => "program",
            List => "list",
            Placeholder => "placeholder",
            Error => "ERROR",
            Token => "token",
            Identifier => "identifier",
            TypeIdentifier => "type_identifier",
            DecimalIntegerLiteral => "decimal_integer_literal",
            HexIntegerLiteral => "hex_integer_literal",
            OctalIntegerLiteral => "octal_integer_literal",
            BinaryIntegerLiteral => "binary_integer_literal",
            DecimalFloatingPointLiteral => "decimal_floating_point_literal",
            HexFloatingPointLiteral => "hex_floating_point_literal",
            True => "true",
            False => "false",
            CharacterLiteral => "character_literal",
            StringLiteral => "string_literal",
            NullLiteral => "null_literal",
            This => "this",
            Super => "super",
            Asterisk => "asterisk",
            Modifier => "modifier",
            RequiresModifier => "requires_modifier",
            VoidType => "void_type",
            IntegralType => "integral_type",
            FloatingPointType => "floating_point_type",
            BooleanType => "boolean_type",
            ScopedTypeIdentifier => "scoped_type_identifier",
            GenericType => "generic_type",
            ArrayType => "array_type",
            AnnotatedType => "annotated_type",
            TypeArguments => "type_arguments",
            Wildcard => "wildcard",
            Dimensions => "dimensions",
            DimensionsExpr => "dimensions_expr",
            TypeParameterList => "type_parameter_list",
            TypeParameter => "type_parameter",
            TypeBound => "type_bound",
            Assignment => "assignment",
            BinaryExpression => "binary_expression",
            InstanceofExpression => "instanceof_expression",
            Lambda => "lambda",
            InferredParameters => "inferred_parameters",
            TernaryExpression => "ternary_expression",
            UnaryExpression => "unary_expression",
            UpdateExpression => "update_expression",
            CastExpression => "cast_expression",
            SwitchExpression => "switch_expression",
            ParenthesizedExpression => "parenthesized_expression",
            ObjectCreationExpression => "object_creation_expression",
            FieldAccess => "field_access",
            ArrayAccess => "array_access",
            Call => "call",
            CallIdentifier => "call_identifier",
            Arguments => "arguments",
            MethodReference => "method_reference",
            ArrayCreationExpression => "array_creation_expression",
            ArrayInitializer => "array_initializer",
            ClassLiteral => "class_literal",
            ScopedIdentifier => "scoped_identifier",
            SwitchBlock => "switch_block",
            SwitchBlockStatementGroup => "switch_block_statement_group",
            SwitchRule => "switch_rule",
            SwitchLabel => "switch_label",
            ExpressionStatement => "expression_statement",
            LabeledStatement => "labeled_statement",
            If => "if",
            IfClause => "if_clause",
            ElseIfClause => "else_if_clause",
            ElseClause => "else_clause",
            While => "while",
            ForClause => "for_clause",
            ForEachClause => "for_each_clause",
            BlockInitializer => "block_initializer",
            BraceEnclosedBody => "brace_enclosed_body",
            EmptyStatement => "empty_statement",
            AssertStatement => "assert_statement",
            DoStatement => "do_statement",
            BreakStatement => "break_statement",
            ContinueStatement => "continue_statement",
            Return => "return",
            YieldStatement => "yield_statement",
            SynchronizedStatement => "synchronized_statement",
            LocalVariableDeclaration => "local_variable_declaration",
            Throw => "throw",
            Try => "try",
            TryClause => "try_clause",
            Catch => "catch",
            CatchParameter => "catch_parameter",
            CatchType => "catch_type",
            FinallyClause => "finally_clause",
            TryWithResourcesStatement => "try_with_resources_statement",
            ResourceSpecification => "resource_specification",
            Resource => "resource",
            Package => "package",
            Import => "import",
            ModuleDeclaration => "module_declaration",
            ModuleBody => "module_body",
            ModuleDirective => "module_directive",
            Class => "class",
            Interface => "interface",
            Enum => "enum",
            EnumBody => "enum_body",
            EnumConstant => "enum_constant",
            EnumBodyDeclarations => "enum_body_declarations",
            ClassBody => "class_body",
            InterfaceBody => "interface_body",
            ConstantDeclaration => "constant_declaration",
            Property => "property",
            RecordDeclaration => "record_declaration",
            AnnotationTypeDeclaration => "annotation_type_declaration",
            AnnotationTypeBody => "annotation_type_body",
            AnnotationTypeElementDeclaration => "annotation_type_element_declaration",
            StaticInitializer => "static_initializer",
            Constructor => "constructor",
            ConstructorBody => "constructor_body",
            ExplicitConstructorInvocation => "explicit_constructor_invocation",
            Method => "method",
            FormalParameters => "formal_parameters",
            FormalParameter => "formal_parameter",
            SpreadParameter => "spread_parameter",
            ReceiverParameter => "receiver_parameter",
            VariableDeclarator => "variable_declarator",
            Throws => "throws",
            Annotation => "annotation",
            MarkerAnnotation => "marker_annotation",
            AnnotationArgumentList => "annotation_argument_list",
            ElementValuePair => "element_value_pair",
            ElementValueArrayInitializer => "element_value_array_initializer",
        }
    }

    /// Supertype: literal variants
    pub fn is_literal(&self) -> bool {
        use NodeKind::*;
        matches!(
            self,
            DecimalIntegerLiteral
                | HexIntegerLiteral
                | OctalIntegerLiteral
                | BinaryIntegerLiteral
                | DecimalFloatingPointLiteral
                | HexFloatingPointLiteral
                | True
                | False
                | CharacterLiteral
                | StringLiteral
                | NullLiteral
        )
    }

    /// Supertype: primary expression variants
    pub fn is_primary_expression(&self) -> bool {
        use NodeKind::*;
        self.is_literal()
            || matches!(
                self,
                ClassLiteral
                    | This
                    | Identifier
                    | ParenthesizedExpression
                    | ObjectCreationExpression
                    | FieldAccess
                    | ArrayAccess
                    | Call
                    | MethodReference
                    | ArrayCreationExpression
            )
    }

    /// Supertype: expression variants
    pub fn is_expression(&self) -> bool {
        use NodeKind::*;
        self.is_primary_expression()
            || matches!(
                self,
                Assignment
                    | BinaryExpression
                    | InstanceofExpression
                    | Lambda
                    | TernaryExpression
                    | UpdateExpression
                    | UnaryExpression
                    | CastExpression
                    | SwitchExpression
            )
    }

    /// Supertype: statement variants
    pub fn is_statement(&self) -> bool {
        use NodeKind::*;
        matches!(
            self,
            ModuleDeclaration
                | AnnotationTypeDeclaration
                | ExpressionStatement
                | LabeledStatement
                | If
                | While
                | ForClause
                | ForEachClause
                | BraceEnclosedBody
                | EmptyStatement
                | AssertStatement
                | DoStatement
                | BreakStatement
                | ContinueStatement
                | Return
                | YieldStatement
                | SwitchExpression
                | SynchronizedStatement
                | LocalVariableDeclaration
                | Throw
                | Try
                | TryWithResourcesStatement
        )
    }

    /// Supertype: simple (non-array, unannotated) type variants
    pub fn is_simple_type(&self) -> bool {
        use NodeKind::*;
        matches!(
            self,
            VoidType
                | IntegralType
                | FloatingPointType
                | BooleanType
                | TypeIdentifier
                | ScopedTypeIdentifier
                | GenericType
        )
    }

    /// Any type variant, annotated or not
    pub fn is_type(&self) -> bool {
        self.is_simple_type() || matches!(self, NodeKind::ArrayType | NodeKind::AnnotatedType)
    }
}

/// Named roles a child can occupy within its parent.
///
/// Field names are stable across all alternatives that can fill the same
/// structural slot, so `node.field(Field::Body)` works without knowing
/// which alternative matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Left,
    Operator,
    Right,
    Condition,
    Consequence,
    Alternative,
    Operand,
    Value,
    Type,
    Object,
    FieldName,
    Name,
    Body,
    Parameters,
    Parameter,
    ParameterList,
    Identifier,
    Arguments,
    Argument,
    ArgumentList,
    Index,
    Array,
    Scope,
    Key,
    Label,
    DecoratorList,
    ModifierList,
    PackageOptional,
    ImportList,
    TypeDeclarationList,
    StatementList,
    Statement,
    ElseIfClauseList,
    ElseClauseOptional,
    CatchList,
    FinallyClauseOptional,
    Resources,
    BlockInitializerOptional,
    ConditionOptional,
    BlockUpdateOptional,
    BlockIterator,
    BlockCollection,
    ForBody,
    ReturnValue,
    ExtendsOptional,
    ImplementsListOptional,
    ExtendsListOptional,
    TypeParameterList,
    ThrowsOptional,
    ClassMemberList,
    InterfaceMemberList,
    EnumMemberList,
    AssignmentList,
    AssignmentVariable,
    AssignmentValue,
    SpreadParameterVariable,
    Dimensions,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        use Field::*;
        match self {
            Left => "left",
            Operator => "operator",
            Right => "right",
            Condition => "condition",
            Consequence => "consequence",
            Alternative => "alternative",
            Operand => "operand",
            Value => "value",
            Type => "type",
            Object => "object",
            FieldName => "field",
            Name => "name",
            Body => "body",
            Parameters => "parameters",
            Parameter => "parameter",
            ParameterList => "parameter_list",
            Identifier => "identifier",
            Arguments => "arguments",
            Argument => "argument",
            ArgumentList => "argument_list",
            Index => "index",
            Array => "array",
            Scope => "scope",
            Key => "key",
            Label => "label",
            DecoratorList => "decorator_list",
            ModifierList => "modifier_list",
            PackageOptional => "package_optional",
            ImportList => "import_list",
            TypeDeclarationList => "type_declaration_list",
            StatementList => "statement_list",
            Statement => "statement",
            ElseIfClauseList => "else_if_clause_list",
            ElseClauseOptional => "else_clause_optional",
            CatchList => "catch_list",
            FinallyClauseOptional => "finally_clause_optional",
            Resources => "resources",
            BlockInitializerOptional => "block_initializer_optional",
            ConditionOptional => "condition_optional",
            BlockUpdateOptional => "block_update_optional",
            BlockIterator => "block_iterator",
            BlockCollection => "block_collection",
            ForBody => "for_body",
            ReturnValue => "return_value",
            ExtendsOptional => "extends_optional",
            ImplementsListOptional => "implements_list_optional",
            ExtendsListOptional => "extends_list_optional",
            TypeParameterList => "type_parameter_list",
            ThrowsOptional => "throws_optional",
            ClassMemberList => "class_member_list",
            InterfaceMemberList => "interface_member_list",
            EnumMemberList => "enum_member_list",
            AssignmentList => "assignment_list",
            AssignmentVariable => "assignment_variable",
            AssignmentValue => "assignment_value",
            SpreadParameterVariable => "spread_parameter_variable",
            Dimensions => "dimensions",
        }
    }
}

/// One node of the concrete syntax tree.
///
/// Leaves carry the raw token text plus any leading trivia; inner nodes
/// carry their children in source order. `role` is the named field this
/// node occupies in its parent, when it has one.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub role: Option<Field>,
    pub span: Span,
    pub children: Vec<Node>,
    pub text: String,
    pub trivia: Vec<Trivia>,
}

impl Node {
    /// Create a leaf node from token text
    pub fn leaf(kind: NodeKind, text: String, span: Span, trivia: Vec<Trivia>) -> Self {
        Self {
            kind,
            role: None,
            span,
            children: Vec::new(),
            text,
            trivia,
        }
    }

    /// Create an inner node over children already in source order
    pub fn inner(kind: NodeKind, children: Vec<Node>, at: Location) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::empty(at),
        };
        Self {
            kind,
            role: None,
            span,
            children,
            text: String::new(),
            trivia: Vec::new(),
        }
    }

    /// Create the placeholder standing in for an absent optional construct
    pub fn placeholder(role: Field, at: Location) -> Self {
        Self {
            kind: NodeKind::Placeholder,
            role: Some(role),
            span: Span::empty(at),
            children: Vec::new(),
            text: String::new(),
            trivia: Vec::new(),
        }
    }

    /// Create a (possibly empty) list slot over the given items
    pub fn list(role: Field, items: Vec<Node>, at: Location) -> Self {
        let mut node = Node::inner(NodeKind::List, items, at);
        node.role = Some(role);
        node
    }

    pub fn with_role(mut self, role: Field) -> Self {
        self.role = Some(role);
        self
    }

    /// True for the placeholder kind
    pub fn is_placeholder(&self) -> bool {
        self.kind == NodeKind::Placeholder
    }

    /// True for placeholders and empty list slots: the construct was absent
    pub fn is_absent(&self) -> bool {
        self.is_placeholder() || (self.kind == NodeKind::List && self.children.is_empty())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && !self.text.is_empty()
    }

    /// The first child occupying the given field
    pub fn field(&self, field: Field) -> Option<&Node> {
        self.children.iter().find(|c| c.role == Some(field))
    }

    /// All children occupying the given field, in source order
    pub fn fields(&self, field: Field) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |c| c.role == Some(field))
    }

    /// Field lookup by external name
    pub fn field_by_name(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|c| c.role.map(|r| r.as_str()) == Some(name))
    }

    /// The items of a list-valued field (empty when the slot is empty)
    pub fn field_items(&self, field: Field) -> &[Node] {
        self.field(field).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Children that are themselves named (non-token, non-placeholder) nodes
    pub fn named_children(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(|c| !matches!(c.kind, NodeKind::Token | NodeKind::Placeholder))
    }

    /// Depth-first traversal over this node and all descendants
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            for child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// All descendant nodes of the given kind, in traversal order
    pub fn descendants_of_kind(&self, kind: NodeKind) -> Vec<&Node> {
        self.descendants().into_iter().filter(|n| n.kind == kind).collect()
    }

    /// Reconstruct the exact source text under this node: leading trivia
    /// and raw token text of every leaf, in tree order.
    pub fn source_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        for t in &self.trivia {
            out.push_str(&t.text);
        }
        if self.children.is_empty() {
            out.push_str(&self.text);
        } else {
            for child in &self.children {
                child.write_text(out);
            }
        }
    }
}

impl HasSpan for Node {
    fn span(&self) -> Span {
        self.span
    }
}

/// A parsed compilation unit: the `program` root, trivia trailing the last
/// token, and any errors recovered from during the parse.
#[derive(Debug, Clone)]
pub struct Tree {
    pub root: Node,
    pub trailing: Vec<Trivia>,
    pub errors: Vec<ParseError>,
}

impl Tree {
    /// Whether any lexical or syntactic errors were recovered from
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Reconstruct the original input exactly (round-trip property)
    pub fn text(&self) -> String {
        let mut out = self.root.source_text();
        for t in &self.trailing {
            out.push_str(&t.text);
        }
        out
    }
}
