//! Statement grammar.
//!
//! `if` chains are kept flat: one `if` node owns its `if_clause`, a list
//! of `else_if_clause`s, and an optional `else_clause`, so consumers never
//! walk nested alternatives. Optional constructs always materialize as
//! placeholder or empty-list children.

use super::error::ParseError;
use super::lexer::Token;
use super::parser::Parser;
use crate::cst::node::{Field, Node, NodeKind};

impl Parser {
    pub(crate) fn parse_statement(&mut self) -> Result<Node, ParseError> {
        match self.token() {
            Some(Token::LBrace) => self.parse_block(),
            Some(Token::Semicolon) => {
                let at = self.cursor_location();
                Ok(Node::inner(NodeKind::EmptyStatement, vec![self.bump()], at))
            }
            Some(Token::If) => self.parse_if_statement(),
            Some(Token::While) => self.parse_while_statement(),
            Some(Token::Do) => self.parse_do_statement(),
            Some(Token::For) => self.parse_for_statement(),
            Some(Token::Switch) => self.parse_switch_statement(),
            Some(Token::Try) => self.parse_try_statement(),
            Some(Token::Return) => self.parse_return_statement(),
            Some(Token::Yield) => self.parse_yield_statement(),
            Some(Token::Break) => self.parse_break_statement(),
            Some(Token::Continue) => self.parse_continue_statement(),
            Some(Token::Throw) => self.parse_throw_statement(),
            Some(Token::Assert) => self.parse_assert_statement(),
            Some(Token::Synchronized) if self.check_next(Token::LParen) => {
                self.parse_synchronized_statement()
            }
            Some(Token::At) if self.check_next(Token::Interface) => {
                self.parse_annotation_type_declaration()
            }
            _ if self.type_declaration_ahead() => self.parse_type_declaration(),
            _ if self.record_ahead() => self.parse_record_declaration(),
            _ if self.module_declaration_ahead() => self.parse_module_declaration(),
            Some(Token::Identifier) if self.check_next(Token::Colon) => {
                self.parse_labeled_statement()
            }
            _ if self.local_variable_ahead() => self.parse_local_variable_declaration(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `{ statements }` with per-statement recovery
    pub(crate) fn parse_block(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let open = self.expect(Token::LBrace, "'{'")?;
        let list_at = self.prev_end();
        let mut statements = Vec::new();
        while !self.check(Token::RBrace) && !self.is_at_end() {
            statements.push(self.statement_or_recover());
        }
        let children = vec![
            open,
            Node::list(Field::StatementList, statements, list_at),
            self.expect(Token::RBrace, "'}'")?,
        ];
        Ok(Node::inner(NodeKind::BraceEnclosedBody, children, at))
    }

    fn parse_expression_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let children = vec![
            self.parse_expression()?.with_role(Field::Value),
            self.expect(Token::Semicolon, "';'")?,
        ];
        Ok(Node::inner(NodeKind::ExpressionStatement, children, at))
    }

    fn parse_labeled_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let children = vec![
            self.bump_as(NodeKind::Identifier).with_role(Field::Label),
            self.expect(Token::Colon, "':'")?,
            self.parse_statement()?.with_role(Field::Statement),
        ];
        Ok(Node::inner(NodeKind::LabeledStatement, children, at))
    }

    // Conditionals

    /// The whole chain in one node: `if_clause`, `else_if_clause_list`,
    /// `else_clause_optional`. An `else` always attaches to the nearest
    /// unfinished `if`, because clause bodies are parsed before the chain
    /// loop looks at `else`.
    fn parse_if_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.parse_if_clause()?];

        let list_at = self.prev_end();
        let mut else_ifs = Vec::new();
        while self.check(Token::Else) && self.check_next(Token::If) {
            else_ifs.push(self.parse_else_if_clause()?);
        }
        children.push(Node::list(Field::ElseIfClauseList, else_ifs, list_at));

        if self.check(Token::Else) {
            let clause_at = self.cursor_location();
            let clause = vec![
                self.bump(),
                self.parse_statement()?.with_role(Field::Body),
            ];
            children.push(
                Node::inner(NodeKind::ElseClause, clause, clause_at)
                    .with_role(Field::ElseClauseOptional),
            );
        } else {
            children.push(self.ph(Field::ElseClauseOptional));
        }
        Ok(Node::inner(NodeKind::If, children, at))
    }

    fn parse_if_clause(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::If, "'if'")?];
        children.extend(self.parse_condition()?);
        children.push(self.parse_statement()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::IfClause, children, at))
    }

    fn parse_else_if_clause(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![
            self.expect(Token::Else, "'else'")?,
            self.expect(Token::If, "'if'")?,
        ];
        children.extend(self.parse_condition()?);
        children.push(self.parse_statement()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::ElseIfClause, children, at))
    }

    /// `( expression )` in condition position
    fn parse_condition(&mut self) -> Result<Vec<Node>, ParseError> {
        Ok(vec![
            self.expect(Token::LParen, "'('")?,
            self.parse_expression()?.with_role(Field::Condition),
            self.expect(Token::RParen, "')'")?,
        ])
    }

    // Loops

    fn parse_while_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::While, "'while'")?];
        children.extend(self.parse_condition()?);
        children.push(self.parse_statement()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::While, children, at))
    }

    fn parse_do_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![
            self.expect(Token::Do, "'do'")?,
            self.parse_statement()?.with_role(Field::Body),
            self.expect(Token::While, "'while'")?,
        ];
        children.extend(self.parse_condition()?);
        children.push(self.expect(Token::Semicolon, "';'")?);
        Ok(Node::inner(NodeKind::DoStatement, children, at))
    }

    /// Dispatch between the three-part `for` and the enhanced `for`
    fn parse_for_statement(&mut self) -> Result<Node, ParseError> {
        if self.for_each_ahead() {
            self.parse_for_each_clause()
        } else {
            self.parse_for_clause()
        }
    }

    /// `for ( [mods] type name :` opens the enhanced form
    fn for_each_ahead(&mut self) -> bool {
        if !self.check(Token::For) || !self.check_next(Token::LParen) {
            return false;
        }
        let save = self.current;
        self.current += 2;
        let ok = self.skim_annotations()
            && {
                self.skim_modifiers();
                self.skim_type()
            }
            && self.check(Token::Identifier)
            && self.token_at(self.current + 1) == Some(Token::Colon);
        self.current = save;
        ok
    }

    /// `for ( init ; cond ; update ) body` with every slot materialized
    fn parse_for_clause(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![
            self.expect(Token::For, "'for'")?,
            self.expect(Token::LParen, "'('")?,
        ];

        if self.check(Token::Semicolon) {
            children.push(self.ph(Field::BlockInitializerOptional));
            children.push(self.bump());
        } else if self.local_variable_ahead() {
            // The declaration owns the first semicolon
            children.push(
                self.parse_local_variable_declaration()?
                    .with_role(Field::BlockInitializerOptional),
            );
        } else {
            let init_at = self.cursor_location();
            let mut init = vec![self.parse_expression()?];
            while self.check(Token::Comma) {
                init.push(self.bump());
                init.push(self.parse_expression()?);
            }
            children.push(
                Node::inner(NodeKind::BlockInitializer, init, init_at)
                    .with_role(Field::BlockInitializerOptional),
            );
            children.push(self.expect(Token::Semicolon, "';'")?);
        }

        if self.check(Token::Semicolon) {
            children.push(self.ph(Field::ConditionOptional));
        } else {
            children.push(self.parse_expression()?.with_role(Field::ConditionOptional));
        }
        children.push(self.expect(Token::Semicolon, "';'")?);

        if self.check(Token::RParen) {
            children.push(self.ph(Field::BlockUpdateOptional));
        } else {
            let update_at = self.cursor_location();
            let mut update = vec![self.parse_expression()?];
            while self.check(Token::Comma) {
                update.push(self.bump());
                update.push(self.parse_expression()?);
            }
            children.push(
                Node::inner(NodeKind::BlockInitializer, update, update_at)
                    .with_role(Field::BlockUpdateOptional),
            );
        }
        children.push(self.expect(Token::RParen, "')'")?);
        children.push(self.parse_statement()?.with_role(Field::ForBody));
        Ok(Node::inner(NodeKind::ForClause, children, at))
    }

    /// `for ( [mods] type name : collection ) body`
    fn parse_for_each_clause(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![
            self.expect(Token::For, "'for'")?,
            self.expect(Token::LParen, "'('")?,
        ];

        let iter_at = self.cursor_location();
        let mut iterator = Vec::new();
        iterator.push(self.parse_decorator_list()?);
        iterator.push(self.parse_modifier_list());
        iterator.push(self.parse_unannotated_type()?.with_role(Field::Type));
        iterator.push(self.expect_identifier(NodeKind::Identifier)?.with_role(Field::Name));
        children.push(
            Node::inner(NodeKind::VariableDeclarator, iterator, iter_at)
                .with_role(Field::BlockIterator),
        );

        children.push(self.expect(Token::Colon, "':'")?);
        children.push(self.parse_expression()?.with_role(Field::BlockCollection));
        children.push(self.expect(Token::RParen, "')'")?);
        children.push(self.parse_statement()?.with_role(Field::ForBody));
        Ok(Node::inner(NodeKind::ForEachClause, children, at))
    }

    // Switch in statement position

    /// The expression and statement readings share one node kind; a
    /// trailing `;` marks the value being discarded as a statement.
    fn parse_switch_statement(&mut self) -> Result<Node, ParseError> {
        let switch = self.parse_switch_expression()?;
        if self.check(Token::Semicolon) {
            let at = switch.span.start;
            let children = vec![switch.with_role(Field::Value), self.bump()];
            return Ok(Node::inner(NodeKind::ExpressionStatement, children, at));
        }
        Ok(switch)
    }

    // Try

    fn parse_try_statement(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::Try) && self.check_next(Token::LParen) {
            self.parse_try_with_resources()
        } else {
            self.parse_plain_try()
        }
    }

    fn parse_plain_try(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let clause_at = at;
        let clause = vec![
            self.expect(Token::Try, "'try'")?,
            self.parse_block()?.with_role(Field::Body),
        ];
        let mut children = vec![Node::inner(NodeKind::TryClause, clause, clause_at)];
        children.push(self.parse_catch_list()?);
        children.push(self.parse_finally_optional()?);
        Ok(Node::inner(NodeKind::Try, children, at))
    }

    fn parse_try_with_resources(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Try, "'try'")?];
        children.push(self.parse_resource_specification()?.with_role(Field::Resources));
        children.push(self.parse_block()?.with_role(Field::Body));
        children.push(self.parse_catch_list()?);
        children.push(self.parse_finally_optional()?);
        Ok(Node::inner(NodeKind::TryWithResourcesStatement, children, at))
    }

    /// `( resource {; resource} [;] )`
    fn parse_resource_specification(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LParen, "'('")?];
        children.push(self.parse_resource()?);
        while self.check(Token::Semicolon) {
            children.push(self.bump());
            if self.check(Token::RParen) {
                break;
            }
            children.push(self.parse_resource()?);
        }
        children.push(self.expect(Token::RParen, "')'")?);
        Ok(Node::inner(NodeKind::ResourceSpecification, children, at))
    }

    /// `[mods] type name = value`, or an existing variable by name/access
    fn parse_resource(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let save = self.current;
        let declared = self.skim_annotations()
            && {
                self.skim_modifiers();
                self.skim_type()
            }
            && self.check(Token::Identifier)
            && self.token_at(self.current + 1) == Some(Token::Assign);
        self.current = save;

        let mut children = Vec::new();
        if declared {
            children.push(self.parse_decorator_list()?);
            children.push(self.parse_modifier_list());
            children.push(self.parse_unannotated_type()?.with_role(Field::Type));
            children.push(
                self.expect_identifier(NodeKind::Identifier)?
                    .with_role(Field::AssignmentVariable),
            );
            children.push(self.expect(Token::Assign, "'='")?);
            children.push(self.parse_expression()?.with_role(Field::AssignmentValue));
        } else {
            children.push(self.parse_expression()?.with_role(Field::Value));
        }
        Ok(Node::inner(NodeKind::Resource, children, at))
    }

    fn parse_catch_list(&mut self) -> Result<Node, ParseError> {
        let at = self.prev_end();
        let mut catches = Vec::new();
        while self.check(Token::Catch) {
            catches.push(self.parse_catch_clause()?);
        }
        Ok(Node::list(Field::CatchList, catches, at))
    }

    /// `catch ( [mods] Type {| Type} name ) body`
    fn parse_catch_clause(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![
            self.expect(Token::Catch, "'catch'")?,
            self.expect(Token::LParen, "'('")?,
        ];

        let param_at = self.cursor_location();
        let mut param = vec![self.parse_decorator_list()?, self.parse_modifier_list()];
        let types_at = self.cursor_location();
        let mut types = vec![self.parse_unannotated_type()?];
        while self.check(Token::Pipe) {
            types.push(self.bump());
            types.push(self.parse_unannotated_type()?);
        }
        param.push(Node::inner(NodeKind::CatchType, types, types_at).with_role(Field::Type));
        param.push(self.expect_identifier(NodeKind::Identifier)?.with_role(Field::Name));
        children.push(
            Node::inner(NodeKind::CatchParameter, param, param_at).with_role(Field::Parameter),
        );

        children.push(self.expect(Token::RParen, "')'")?);
        children.push(self.parse_block()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::Catch, children, at))
    }

    fn parse_finally_optional(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::Finally) {
            let at = self.cursor_location();
            let children = vec![self.bump(), self.parse_block()?.with_role(Field::Body)];
            Ok(Node::inner(NodeKind::FinallyClause, children, at)
                .with_role(Field::FinallyClauseOptional))
        } else {
            Ok(self.ph(Field::FinallyClauseOptional))
        }
    }

    // Jumps and simple statements

    fn parse_return_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Return, "'return'")?];
        if self.check(Token::Semicolon) {
            children.push(self.ph(Field::ReturnValue));
        } else {
            children.push(self.parse_expression()?.with_role(Field::ReturnValue));
        }
        children.push(self.expect(Token::Semicolon, "';'")?);
        Ok(Node::inner(NodeKind::Return, children, at))
    }

    fn parse_yield_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let children = vec![
            self.expect(Token::Yield, "'yield'")?,
            self.parse_expression()?.with_role(Field::Value),
            self.expect(Token::Semicolon, "';'")?,
        ];
        Ok(Node::inner(NodeKind::YieldStatement, children, at))
    }

    fn parse_break_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Break, "'break'")?];
        if self.check(Token::Identifier) {
            children.push(self.bump_as(NodeKind::Identifier).with_role(Field::Label));
        } else {
            children.push(self.ph(Field::Label));
        }
        children.push(self.expect(Token::Semicolon, "';'")?);
        Ok(Node::inner(NodeKind::BreakStatement, children, at))
    }

    fn parse_continue_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Continue, "'continue'")?];
        if self.check(Token::Identifier) {
            children.push(self.bump_as(NodeKind::Identifier).with_role(Field::Label));
        } else {
            children.push(self.ph(Field::Label));
        }
        children.push(self.expect(Token::Semicolon, "';'")?);
        Ok(Node::inner(NodeKind::ContinueStatement, children, at))
    }

    pub(crate) fn parse_throw_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let children = vec![
            self.expect(Token::Throw, "'throw'")?,
            self.parse_expression()?.with_role(Field::Value),
            self.expect(Token::Semicolon, "';'")?,
        ];
        Ok(Node::inner(NodeKind::Throw, children, at))
    }

    fn parse_assert_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![
            self.expect(Token::Assert, "'assert'")?,
            self.parse_expression()?.with_role(Field::Condition),
        ];
        if self.check(Token::Colon) {
            children.push(self.bump());
            children.push(self.parse_expression()?.with_role(Field::Value));
        } else {
            children.push(self.ph(Field::Value));
        }
        children.push(self.expect(Token::Semicolon, "';'")?);
        Ok(Node::inner(NodeKind::AssertStatement, children, at))
    }

    fn parse_synchronized_statement(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Synchronized, "'synchronized'")?];
        children.extend(self.parse_condition()?);
        children.push(self.parse_block()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::SynchronizedStatement, children, at))
    }

    // Local variables

    /// `[annotations] [modifiers] type declarator {, declarator} ;` with
    /// one uniform declarator shape whether or not an initializer exists
    pub(crate) fn parse_local_variable_declaration(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.parse_decorator_list()?, self.parse_modifier_list()];
        children.push(self.parse_unannotated_type()?.with_role(Field::Type));

        let list_at = self.cursor_location();
        let mut declarators = vec![self.parse_variable_declarator()?];
        while self.check(Token::Comma) {
            declarators.push(self.bump());
            declarators.push(self.parse_variable_declarator()?);
        }
        children.push(Node::list(Field::AssignmentList, declarators, list_at));

        children.push(self.expect(Token::Semicolon, "';'")?);
        Ok(Node::inner(NodeKind::LocalVariableDeclaration, children, at))
    }

    /// `name [dims] [= value]`
    pub(crate) fn parse_variable_declarator(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![
            self.expect_identifier(NodeKind::Identifier)?
                .with_role(Field::AssignmentVariable),
        ];
        if self.check(Token::LBracket) && self.check_next(Token::RBracket) {
            children.push(self.parse_dimensions()?.with_role(Field::Dimensions));
        } else {
            children.push(self.ph(Field::Dimensions));
        }
        if self.check(Token::Assign) {
            children.push(self.bump());
            if self.check(Token::LBrace) {
                children.push(self.parse_array_initializer()?.with_role(Field::AssignmentValue));
            } else {
                children.push(self.parse_expression()?.with_role(Field::AssignmentValue));
            }
        } else {
            children.push(self.ph(Field::AssignmentValue));
        }
        Ok(Node::inner(NodeKind::VariableDeclarator, children, at))
    }

    // Modules

    /// `[annotations] [open] module a.b.c { directives }`. The words
    /// `open` and `module` arrive as plain identifiers and are reserved
    /// only by this position.
    pub(crate) fn parse_module_declaration(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.parse_decorator_list()?];
        if self.check_contextual("open") {
            children.push(self.bump());
        }
        if !self.check_contextual("module") {
            return Err(self.error_unexpected("'module'"));
        }
        children.push(self.bump());
        children.push(self.parse_scoped_name()?.with_role(Field::Name));
        children.push(self.parse_module_body()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::ModuleDeclaration, children, at))
    }

    fn parse_module_body(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LBrace, "'{'")?];
        while !self.check(Token::RBrace) && !self.is_at_end() {
            let mark = self.current;
            match self.parse_module_directive() {
                Ok(directive) => children.push(directive),
                Err(e) => children.push(self.recover_statement(mark, e)),
            }
        }
        children.push(self.expect(Token::RBrace, "'}'")?);
        Ok(Node::inner(NodeKind::ModuleBody, children, at))
    }

    /// `requires|exports|opens|uses|provides ... ;` with dotted names and
    /// the directive-local contextual words (`transitive`, `to`, `with`)
    fn parse_module_directive(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = Vec::new();
        if !self.check(Token::Identifier) && !self.check(Token::Static) {
            return Err(self.error_unexpected("module directive"));
        }
        let keyword = self.peek_lexeme().unwrap_or_default().to_string();
        children.push(self.bump());

        if keyword == "requires" {
            while self.check(Token::Static)
                || self.check_contextual("transitive") && self.check_next(Token::Identifier)
            {
                children.push(self.bump_as(NodeKind::RequiresModifier));
            }
        }
        children.push(self.parse_scoped_name()?.with_role(Field::Name));
        // `exports ... to a, b` / `provides ... with x, y`
        if self.check_contextual("to") || self.check_contextual("with") {
            children.push(self.bump());
            children.push(self.parse_scoped_name()?);
            while self.check(Token::Comma) {
                children.push(self.bump());
                children.push(self.parse_scoped_name()?);
            }
        }
        children.push(self.expect(Token::Semicolon, "';'")?);
        Ok(Node::inner(NodeKind::ModuleDirective, children, at))
    }

    /// `a.b.c` as nested scoped identifiers
    pub(crate) fn parse_scoped_name(&mut self) -> Result<Node, ParseError> {
        let mut node = self.expect_identifier(NodeKind::Identifier)?;
        while self.check(Token::Dot) && self.check_next(Token::Identifier) {
            let at = node.span.start;
            let children = vec![
                node.with_role(Field::Scope),
                self.bump(),
                self.bump_as(NodeKind::Identifier).with_role(Field::Name),
            ];
            node = Node::inner(NodeKind::ScopedIdentifier, children, at);
        }
        Ok(node)
    }
}
