//! Expression grammar: a single precedence-climbing loop over the operator
//! table, plus unary, postfix, and primary forms.
//!
//! Ambiguous prefixes (lambda, cast, generic method reference, class
//! literal) are decided by the oracles in `conflicts` before any node is
//! built, so the engine itself never backtracks over constructed trees.

use super::error::ParseError;
use super::lexer::Token;
use super::parser::Parser;
use super::precedence::{binary_operator, ASSIGN, LOWEST, REL, TERNARY};
use crate::cst::node::{Field, Node, NodeKind};

impl Parser {
    pub(crate) fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_expression_min(LOWEST)
    }

    /// Climb the precedence table: parse one unary-level operand, then fold
    /// in operators at or above `min`, recursing one level tighter for
    /// left-associative operators and at the same level for right.
    pub(crate) fn parse_expression_min(&mut self, min: u8) -> Result<Node, ParseError> {
        if self.lambda_ahead() {
            return self.parse_lambda();
        }
        let mut lhs = self.parse_unary()?;
        loop {
            let Some(token) = self.token() else { break };
            if token.is_assignment_operator() && min <= ASSIGN {
                let at = lhs.span.start;
                let op = self.bump();
                let rhs = self.parse_expression_min(ASSIGN)?;
                let children = vec![
                    lhs.with_role(Field::Left),
                    op.with_role(Field::Operator),
                    rhs.with_role(Field::Right),
                ];
                lhs = Node::inner(NodeKind::Assignment, children, at);
                continue;
            }
            if token == Token::Question && min <= TERNARY {
                let at = lhs.span.start;
                let question = self.bump();
                let consequence = self.parse_expression()?;
                let colon = self.expect(Token::Colon, "':'")?;
                let alternative = self.parse_expression_min(TERNARY)?;
                let children = vec![
                    lhs.with_role(Field::Condition),
                    question,
                    consequence.with_role(Field::Consequence),
                    colon,
                    alternative.with_role(Field::Alternative),
                ];
                lhs = Node::inner(NodeKind::TernaryExpression, children, at);
                continue;
            }
            if token == Token::InstanceOf && min <= REL {
                lhs = self.parse_instanceof(lhs)?;
                continue;
            }
            let Some((level, _assoc)) = binary_operator(token) else { break };
            if level < min {
                break;
            }
            let at = lhs.span.start;
            let op = self.bump();
            let rhs = self.parse_expression_min(level + 1)?;
            let children = vec![
                lhs.with_role(Field::Left),
                op.with_role(Field::Operator),
                rhs.with_role(Field::Right),
            ];
            lhs = Node::inner(NodeKind::BinaryExpression, children, at);
        }
        Ok(lhs)
    }

    /// `left instanceof [final] type [binding]`
    fn parse_instanceof(&mut self, left: Node) -> Result<Node, ParseError> {
        let at = left.span.start;
        let mut children = vec![left.with_role(Field::Left)];
        children.push(self.expect(Token::InstanceOf, "'instanceof'")?);
        if self.check(Token::Final) {
            children.push(self.bump());
        }
        children.push(self.parse_type()?.with_role(Field::Right));
        if self.check(Token::Identifier) {
            children.push(self.bump_as(NodeKind::Identifier).with_role(Field::Name));
        } else {
            children.push(self.ph(Field::Name));
        }
        Ok(Node::inner(NodeKind::InstanceofExpression, children, at))
    }

    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        match self.token() {
            Some(Token::Inc) | Some(Token::Dec) => {
                let at = self.cursor_location();
                let op = self.bump().with_role(Field::Operator);
                let operand = self.parse_unary()?.with_role(Field::Operand);
                Ok(Node::inner(NodeKind::UpdateExpression, vec![op, operand], at))
            }
            Some(Token::Plus) | Some(Token::Minus) | Some(Token::Bang) | Some(Token::Tilde) => {
                let at = self.cursor_location();
                let op = self.bump().with_role(Field::Operator);
                let operand = self.parse_unary()?.with_role(Field::Operand);
                Ok(Node::inner(NodeKind::UnaryExpression, vec![op, operand], at))
            }
            Some(Token::Switch) => self.parse_switch_expression(),
            Some(Token::LParen) if self.cast_ahead() => self.parse_cast(),
            _ => self.parse_postfix(),
        }
    }

    /// `( type {& type} ) operand`, entered only after the cast oracle
    fn parse_cast(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LParen, "'('")?];
        children.push(self.parse_type()?.with_role(Field::Type));
        while self.check(Token::Amp) {
            children.push(self.bump());
            children.push(self.parse_type()?.with_role(Field::Type));
        }
        children.push(self.expect(Token::RParen, "')'")?);
        // The operand binds at unary strength so `(int) x + y` casts only x;
        // a lambda operand is legal and claims the rest of the expression
        let operand = if self.lambda_ahead() {
            self.parse_lambda()?
        } else {
            self.parse_unary()?
        };
        children.push(operand.with_role(Field::Value));
        Ok(Node::inner(NodeKind::CastExpression, children, at))
    }

    /// Primary expression plus any chain of selectors: field access, calls,
    /// array access, method references, and postfix update operators.
    fn parse_postfix(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.parse_primary()?;
        loop {
            match self.token() {
                Some(Token::Dot) => {
                    if self.check_next(Token::New) {
                        lhs = self.parse_qualified_object_creation(lhs)?;
                    } else {
                        lhs = self.parse_selector(lhs)?;
                    }
                }
                Some(Token::LBracket) => {
                    let at = lhs.span.start;
                    let mut children = vec![lhs.with_role(Field::Array)];
                    children.push(self.bump());
                    children.push(self.parse_expression()?.with_role(Field::Index));
                    children.push(self.expect(Token::RBracket, "']'")?);
                    lhs = Node::inner(NodeKind::ArrayAccess, children, at);
                }
                Some(Token::DoubleColon) => {
                    lhs = self.parse_method_reference(lhs)?;
                }
                Some(Token::Inc) | Some(Token::Dec) => {
                    let at = lhs.span.start;
                    let children = vec![
                        lhs.with_role(Field::Operand),
                        self.bump().with_role(Field::Operator),
                    ];
                    lhs = Node::inner(NodeKind::UpdateExpression, children, at);
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    /// `.name`, `.name(args)`, `.<T>name(args)`, `.this`, `.super`
    fn parse_selector(&mut self, object: Node) -> Result<Node, ParseError> {
        let at = object.span.start;
        let dot = self.bump();
        if self.check(Token::This) || self.check(Token::Super) {
            let kind = if self.check(Token::This) { NodeKind::This } else { NodeKind::Super };
            let children = vec![
                object.with_role(Field::Object),
                dot,
                self.bump_as(kind).with_role(Field::FieldName),
            ];
            return Ok(Node::inner(NodeKind::FieldAccess, children, at));
        }
        let type_arguments = if self.check(Token::Lt) {
            Some(self.parse_type_arguments()?)
        } else {
            None
        };
        let name = self.expect_identifier(NodeKind::Identifier)?;
        if self.check(Token::LParen) {
            let mut children = vec![object.with_role(Field::Object), dot];
            if let Some(args) = type_arguments {
                children.push(args);
            }
            children.push(self.call_identifier(name));
            children.push(self.parse_arguments()?.with_role(Field::ArgumentList));
            return Ok(Node::inner(NodeKind::Call, children, at));
        }
        if let Some(args) = type_arguments {
            return Err(ParseError::invalid_syntax(
                "type arguments require a method call",
                args.span.start,
            ));
        }
        let children = vec![
            object.with_role(Field::Object),
            dot,
            name.with_role(Field::FieldName),
        ];
        Ok(Node::inner(NodeKind::FieldAccess, children, at))
    }

    fn call_identifier(&self, name: Node) -> Node {
        let at = name.span.start;
        Node::inner(NodeKind::CallIdentifier, vec![name], at).with_role(Field::Identifier)
    }

    /// `lhs :: [type_args] name|new`
    fn parse_method_reference(&mut self, lhs: Node) -> Result<Node, ParseError> {
        let at = lhs.span.start;
        let mut children = vec![lhs.with_role(Field::Object)];
        children.push(self.expect(Token::DoubleColon, "'::'")?);
        if self.check(Token::Lt) {
            children.push(self.parse_type_arguments()?);
        }
        match self.token() {
            Some(Token::New) => children.push(self.bump()),
            Some(Token::Identifier) => {
                children.push(self.bump_as(NodeKind::Identifier).with_role(Field::Name));
            }
            _ => return Err(self.error_unexpected("method name or 'new'")),
        }
        Ok(Node::inner(NodeKind::MethodReference, children, at))
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        match self.token() {
            Some(Token::DecimalInteger) => Ok(self.bump_as(NodeKind::DecimalIntegerLiteral)),
            Some(Token::HexInteger) => Ok(self.bump_as(NodeKind::HexIntegerLiteral)),
            Some(Token::OctalInteger) => Ok(self.bump_as(NodeKind::OctalIntegerLiteral)),
            Some(Token::BinaryInteger) => Ok(self.bump_as(NodeKind::BinaryIntegerLiteral)),
            Some(Token::DecimalFloat) => Ok(self.bump_as(NodeKind::DecimalFloatingPointLiteral)),
            Some(Token::HexFloat) => Ok(self.bump_as(NodeKind::HexFloatingPointLiteral)),
            Some(Token::StringLiteral) => Ok(self.bump_as(NodeKind::StringLiteral)),
            Some(Token::CharLiteral) => Ok(self.bump_as(NodeKind::CharacterLiteral)),
            Some(Token::True) => Ok(self.bump_as(NodeKind::True)),
            Some(Token::False) => Ok(self.bump_as(NodeKind::False)),
            Some(Token::Null) => Ok(self.bump_as(NodeKind::NullLiteral)),
            Some(Token::This) => Ok(self.bump_as(NodeKind::This)),
            Some(Token::Super) => Ok(self.bump_as(NodeKind::Super)),
            Some(Token::New) => self.parse_object_or_array_creation(),
            Some(Token::LParen) => {
                let at = self.cursor_location();
                let children = vec![
                    self.bump(),
                    self.parse_expression()?.with_role(Field::Value),
                    self.expect(Token::RParen, "')'")?,
                ];
                Ok(Node::inner(NodeKind::ParenthesizedExpression, children, at))
            }
            Some(t) if t.is_primitive_type() => {
                let ty = self.parse_unannotated_type()?;
                self.finish_class_literal(ty)
            }
            Some(Token::Identifier) => self.parse_identifier_led(),
            _ => Err(self.error_unexpected("expression")),
        }
    }

    /// Identifier-led primaries: plain name, call, class literal, or a
    /// committed type parse feeding a method reference
    fn parse_identifier_led(&mut self) -> Result<Node, ParseError> {
        match self.type_led_expression_ahead() {
            Some(Token::Class) => {
                let ty = self.parse_unannotated_type()?;
                return self.finish_class_literal(ty);
            }
            Some(Token::DoubleColon) if self.type_ahead_beyond_name() => {
                // Generic or array types cannot be read as expressions, so
                // the type parse is the only consistent reading here
                return self.parse_unannotated_type();
            }
            _ => {}
        }
        let name = self.bump_as(NodeKind::Identifier);
        if self.check(Token::LParen) {
            let at = name.span.start;
            let children = vec![
                self.call_identifier(name),
                self.parse_arguments()?.with_role(Field::ArgumentList),
            ];
            return Ok(Node::inner(NodeKind::Call, children, at));
        }
        Ok(name)
    }

    /// The skimmed type ahead has structure a selector chain cannot mimic
    /// (type arguments or array dimensions)
    fn type_ahead_beyond_name(&mut self) -> bool {
        let save = self.current;
        let ok = self.skim_type();
        let beyond = ok
            && (save..self.current).any(|i| {
                matches!(self.token_at(i), Some(Token::Lt) | Some(Token::LBracket))
            });
        self.current = save;
        beyond
    }

    /// `type . class`
    fn finish_class_literal(&mut self, ty: Node) -> Result<Node, ParseError> {
        if !self.check(Token::Dot) {
            // Bare type in expression position: method reference target
            return Ok(ty);
        }
        let at = ty.span.start;
        let children = vec![
            ty.with_role(Field::Type),
            self.expect(Token::Dot, "'.'")?,
            self.expect(Token::Class, "'class'")?,
        ];
        Ok(Node::inner(NodeKind::ClassLiteral, children, at))
    }

    /// `new [type_args] type ...`: arguments and optional anonymous body,
    /// or array dimensions and optional initializer
    fn parse_object_or_array_creation(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let new_kw = self.expect(Token::New, "'new'")?;
        let type_arguments = if self.check(Token::Lt) {
            Some(self.parse_type_arguments()?)
        } else {
            None
        };
        let ty = self.parse_simple_type()?;

        if self.check(Token::LBracket) || (self.check(Token::At)) {
            let mut children = vec![new_kw];
            if let Some(args) = type_arguments {
                children.push(args);
            }
            children.push(ty.with_role(Field::Type));
            // Sized dimensions first, then any bare ones
            while self.check(Token::LBracket) && !self.check_next(Token::RBracket) {
                let dim_at = self.cursor_location();
                let dim = vec![
                    self.bump(),
                    self.parse_expression()?,
                    self.expect(Token::RBracket, "']'")?,
                ];
                children.push(Node::inner(NodeKind::DimensionsExpr, dim, dim_at));
            }
            if self.check(Token::LBracket) || self.check(Token::At) {
                children.push(self.parse_dimensions()?.with_role(Field::Dimensions));
            }
            if self.check(Token::LBrace) {
                children.push(self.parse_array_initializer()?.with_role(Field::Value));
            }
            return Ok(Node::inner(NodeKind::ArrayCreationExpression, children, at));
        }

        let mut children = vec![new_kw];
        if let Some(args) = type_arguments {
            children.push(args);
        }
        children.push(ty.with_role(Field::Type));
        children.push(self.parse_arguments()?.with_role(Field::ArgumentList));
        if self.check(Token::LBrace) {
            children.push(self.parse_class_body()?.with_role(Field::Body));
        } else {
            children.push(self.ph(Field::Body));
        }
        Ok(Node::inner(NodeKind::ObjectCreationExpression, children, at))
    }

    /// `object . new type(args) [body]` (inner class instantiation)
    fn parse_qualified_object_creation(&mut self, object: Node) -> Result<Node, ParseError> {
        let at = object.span.start;
        let mut children = vec![object.with_role(Field::Object)];
        children.push(self.expect(Token::Dot, "'.'")?);
        children.push(self.expect(Token::New, "'new'")?);
        if self.check(Token::Lt) {
            children.push(self.parse_type_arguments()?);
        }
        children.push(self.parse_simple_type()?.with_role(Field::Type));
        children.push(self.parse_arguments()?.with_role(Field::ArgumentList));
        if self.check(Token::LBrace) {
            children.push(self.parse_class_body()?.with_role(Field::Body));
        } else {
            children.push(self.ph(Field::Body));
        }
        Ok(Node::inner(NodeKind::ObjectCreationExpression, children, at))
    }

    /// `{ [element {, element}] [,] }` where elements are expressions or
    /// nested initializers
    pub(crate) fn parse_array_initializer(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LBrace, "'{'")?];
        while !self.check(Token::RBrace) && !self.is_at_end() {
            if self.check(Token::LBrace) {
                children.push(self.parse_array_initializer()?);
            } else {
                children.push(self.parse_expression()?);
            }
            if self.check(Token::Comma) {
                children.push(self.bump());
            } else {
                break;
            }
        }
        children.push(self.expect(Token::RBrace, "'}'")?);
        Ok(Node::inner(NodeKind::ArrayInitializer, children, at))
    }

    /// `( [expr {, expr}] )`
    pub(crate) fn parse_arguments(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LParen, "'('")?];
        if !self.check(Token::RParen) {
            children.push(self.parse_expression()?.with_role(Field::Argument));
            while self.check(Token::Comma) {
                children.push(self.bump());
                children.push(self.parse_expression()?.with_role(Field::Argument));
            }
        }
        children.push(self.expect(Token::RParen, "')'")?);
        Ok(Node::inner(NodeKind::Arguments, children, at))
    }

    /// Lambda: single inferred name, inferred name list, or full formal
    /// parameters, then `->` and an expression or block body
    fn parse_lambda(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let parameters = if self.check(Token::Identifier) {
            self.bump_as(NodeKind::Identifier)
        } else if self.inferred_parameters_ahead() {
            self.parse_inferred_parameters()?
        } else {
            self.parse_formal_parameters()?
        };
        let children = vec![
            parameters.with_role(Field::Parameters),
            self.expect(Token::Arrow, "'->'")?,
            self.parse_lambda_body()?.with_role(Field::Body),
        ];
        Ok(Node::inner(NodeKind::Lambda, children, at))
    }

    fn parse_lambda_body(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::LBrace) {
            self.parse_block()
        } else {
            self.parse_expression()
        }
    }

    /// `( name {, name} )` with at least one name and nothing else
    fn inferred_parameters_ahead(&self) -> bool {
        if !self.check(Token::LParen) || !self.check_next(Token::Identifier) {
            return false;
        }
        let mut i = self.current + 1;
        loop {
            if self.token_at(i) != Some(Token::Identifier) {
                return false;
            }
            i += 1;
            match self.token_at(i) {
                Some(Token::Comma) => i += 1,
                Some(Token::RParen) => return true,
                _ => return false,
            }
        }
    }

    fn parse_inferred_parameters(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LParen, "'('")?];
        children.push(self.bump_as(NodeKind::Identifier));
        while self.check(Token::Comma) {
            children.push(self.bump());
            children.push(self.expect_identifier(NodeKind::Identifier)?);
        }
        children.push(self.expect(Token::RParen, "')'")?);
        Ok(Node::inner(NodeKind::InferredParameters, children, at))
    }

    /// `switch ( value ) { ... }`: one node kind for both the expression
    /// and statement readings; the block holds either rules or groups
    pub(crate) fn parse_switch_expression(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Switch, "'switch'")?];
        children.push(self.expect(Token::LParen, "'('")?);
        children.push(self.parse_expression()?.with_role(Field::Condition));
        children.push(self.expect(Token::RParen, "')'")?);
        children.push(self.parse_switch_block()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::SwitchExpression, children, at))
    }

    fn parse_switch_block(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LBrace, "'{'")?];
        while !self.check(Token::RBrace) && !self.is_at_end() {
            let mark = self.current;
            match self.parse_switch_section() {
                Ok(section) => children.push(section),
                Err(e) => children.push(self.recover_statement(mark, e)),
            }
        }
        children.push(self.expect(Token::RBrace, "'}'")?);
        Ok(Node::inner(NodeKind::SwitchBlock, children, at))
    }

    /// One labeled section: arrow rules close after one body; colon groups
    /// stack labels and run statements until the next label
    fn parse_switch_section(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let label = self.parse_switch_label()?;
        if self.check(Token::Arrow) {
            let mut children = vec![label, self.bump()];
            let body = if self.check(Token::LBrace) {
                self.parse_block()?
            } else if self.check(Token::Throw) {
                self.parse_throw_statement()?
            } else {
                let at = self.cursor_location();
                let inner = vec![
                    self.parse_expression()?.with_role(Field::Value),
                    self.expect(Token::Semicolon, "';'")?,
                ];
                Node::inner(NodeKind::ExpressionStatement, inner, at)
            };
            children.push(body.with_role(Field::Body));
            return Ok(Node::inner(NodeKind::SwitchRule, children, at));
        }
        let mut children = vec![label, self.expect(Token::Colon, "':'")?];
        while self.check(Token::Case) || self.check(Token::Default) {
            children.push(self.parse_switch_label()?);
            children.push(self.expect(Token::Colon, "':'")?);
        }
        while !matches!(
            self.token(),
            None | Some(Token::Case) | Some(Token::Default) | Some(Token::RBrace)
        ) {
            children.push(self.statement_or_recover());
        }
        Ok(Node::inner(NodeKind::SwitchBlockStatementGroup, children, at))
    }

    fn parse_switch_label(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = Vec::new();
        if self.check(Token::Default) {
            children.push(self.bump());
        } else {
            children.push(self.expect(Token::Case, "'case' or 'default'")?);
            children.push(self.parse_expression()?.with_role(Field::Value));
            while self.check(Token::Comma) {
                children.push(self.bump());
                children.push(self.parse_expression()?.with_role(Field::Value));
            }
        }
        Ok(Node::inner(NodeKind::SwitchLabel, children, at))
    }
}
