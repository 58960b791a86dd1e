//! Declaration grammar: packages, imports, annotations, type declarations
//! and their member bodies.
//!
//! Declaration parents keep a uniform shape: decorator and modifier lists
//! are always present (possibly empty), and optional clauses materialize
//! as placeholders, so `field(...)` lookups never depend on which
//! alternatives matched.

use super::error::ParseError;
use super::lexer::Token;
use super::parser::Parser;
use super::span::Location;
use crate::cst::node::{Field, Node, NodeKind};

impl Parser {
    // Compilation unit clauses

    /// `[annotations] package a.b.c ;`
    pub(crate) fn parse_package(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let children = vec![
            self.parse_decorator_list()?,
            self.expect(Token::Package, "'package'")?,
            self.parse_scoped_name()?.with_role(Field::Name),
            self.expect(Token::Semicolon, "';'")?,
        ];
        Ok(Node::inner(NodeKind::Package, children, at))
    }

    /// `import [static] a.b.c [.*] ;`
    pub(crate) fn parse_import(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Import, "'import'")?];
        if self.check(Token::Static) {
            children.push(self.bump());
        }
        children.push(self.parse_scoped_name()?.with_role(Field::Name));
        if self.check(Token::Dot) {
            children.push(self.bump());
            if self.check(Token::Star) {
                children.push(self.bump_as(NodeKind::Asterisk));
            } else {
                return Err(self.error_unexpected("'*'"));
            }
        }
        children.push(self.expect(Token::Semicolon, "';'")?);
        Ok(Node::inner(NodeKind::Import, children, at))
    }

    // Annotations and modifiers

    /// The (possibly empty) run of annotations before a declaration
    pub(crate) fn parse_decorator_list(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut annotations = Vec::new();
        while self.check(Token::At) && !self.check_next(Token::Interface) {
            annotations.push(self.parse_annotation()?);
        }
        Ok(Node::list(Field::DecoratorList, annotations, at))
    }

    /// The (possibly empty) run of modifier keywords
    pub(crate) fn parse_modifier_list(&mut self) -> Node {
        let at = self.cursor_location();
        let mut modifiers = Vec::new();
        while self.token().map(|t| t.is_modifier()).unwrap_or(false) {
            modifiers.push(self.bump_as(NodeKind::Modifier));
        }
        Node::list(Field::ModifierList, modifiers, at)
    }

    /// `@Name` is a marker annotation; `@Name(...)` carries arguments
    pub(crate) fn parse_annotation(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![
            self.expect(Token::At, "'@'")?,
            self.parse_scoped_name()?.with_role(Field::Name),
        ];
        if self.check(Token::LParen) {
            children.push(self.parse_annotation_argument_list()?.with_role(Field::Arguments));
            return Ok(Node::inner(NodeKind::Annotation, children, at));
        }
        Ok(Node::inner(NodeKind::MarkerAnnotation, children, at))
    }

    /// `( [value | name = value {, name = value}] )`
    fn parse_annotation_argument_list(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LParen, "'('")?];
        if !self.check(Token::RParen) {
            children.push(self.parse_element_value_or_pair()?);
            while self.check(Token::Comma) {
                children.push(self.bump());
                children.push(self.parse_element_value_or_pair()?);
            }
        }
        children.push(self.expect(Token::RParen, "')'")?);
        Ok(Node::inner(NodeKind::AnnotationArgumentList, children, at))
    }

    fn parse_element_value_or_pair(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::Identifier) && self.check_next(Token::Assign) {
            let at = self.cursor_location();
            let children = vec![
                self.bump_as(NodeKind::Identifier).with_role(Field::Key),
                self.bump(),
                self.parse_element_value()?.with_role(Field::Value),
            ];
            return Ok(Node::inner(NodeKind::ElementValuePair, children, at));
        }
        self.parse_element_value()
    }

    fn parse_element_value(&mut self) -> Result<Node, ParseError> {
        match self.token() {
            Some(Token::LBrace) => {
                let at = self.cursor_location();
                let mut children = vec![self.bump()];
                while !self.check(Token::RBrace) && !self.is_at_end() {
                    children.push(self.parse_element_value()?);
                    if self.check(Token::Comma) {
                        children.push(self.bump());
                    } else {
                        break;
                    }
                }
                children.push(self.expect(Token::RBrace, "'}'")?);
                Ok(Node::inner(NodeKind::ElementValueArrayInitializer, children, at))
            }
            Some(Token::At) => self.parse_annotation(),
            _ => self.parse_expression(),
        }
    }

    // Type declarations

    /// Dispatch on the declaring keyword after annotations and modifiers
    pub(crate) fn parse_type_declaration(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let decorators = self.parse_decorator_list()?;
        let modifiers = self.parse_modifier_list();
        match self.token() {
            Some(Token::Class) => self.parse_class_declaration(at, decorators, modifiers),
            Some(Token::Interface) => self.parse_interface_declaration(at, decorators, modifiers),
            Some(Token::Enum) => self.parse_enum_declaration(at, decorators, modifiers),
            _ => Err(self.error_unexpected("'class', 'interface' or 'enum'")),
        }
    }

    fn parse_class_declaration(
        &mut self,
        at: Location,
        decorators: Node,
        modifiers: Node,
    ) -> Result<Node, ParseError> {
        let mut children = vec![decorators, modifiers];
        children.push(self.expect(Token::Class, "'class'")?);
        children.push(
            self.expect_identifier(NodeKind::TypeIdentifier)?
                .with_role(Field::Name),
        );
        children.push(self.parse_type_parameters_optional()?);

        if self.check(Token::Extends) {
            let ext_at = self.cursor_location();
            let ext = vec![self.bump(), self.parse_type()?.with_role(Field::Type)];
            children.push(Node::inner(NodeKind::TypeBound, ext, ext_at).with_role(Field::ExtendsOptional));
        } else {
            children.push(self.ph(Field::ExtendsOptional));
        }
        children.push(self.parse_implements_optional()?);
        children.push(self.parse_class_body()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::Class, children, at))
    }

    fn parse_type_parameters_optional(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::Lt) {
            Ok(self.parse_type_parameter_list()?.with_role(Field::TypeParameterList))
        } else {
            Ok(self.ph(Field::TypeParameterList))
        }
    }

    fn parse_implements_optional(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::Implements) {
            let at = self.cursor_location();
            let mut children = vec![self.bump(), self.parse_type()?];
            while self.check(Token::Comma) {
                children.push(self.bump());
                children.push(self.parse_type()?);
            }
            Ok(Node::inner(NodeKind::TypeBound, children, at)
                .with_role(Field::ImplementsListOptional))
        } else {
            Ok(self.ph(Field::ImplementsListOptional))
        }
    }

    /// `{ member* }` with per-member recovery
    pub(crate) fn parse_class_body(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let open = self.expect(Token::LBrace, "'{'")?;
        let list_at = self.prev_end();
        let mut members = Vec::new();
        while !self.check(Token::RBrace) && !self.is_at_end() {
            let mark = self.current;
            match self.parse_class_member() {
                Ok(member) => members.push(member),
                Err(e) => members.push(self.recover_member(mark, e)),
            }
        }
        let children = vec![
            open,
            Node::list(Field::ClassMemberList, members, list_at),
            self.expect(Token::RBrace, "'}'")?,
        ];
        Ok(Node::inner(NodeKind::ClassBody, children, at))
    }

    fn parse_class_member(&mut self) -> Result<Node, ParseError> {
        match self.token() {
            Some(Token::Semicolon) => {
                let at = self.cursor_location();
                Ok(Node::inner(NodeKind::EmptyStatement, vec![self.bump()], at))
            }
            Some(Token::LBrace) => self.parse_block(),
            Some(Token::At) if self.check_next(Token::Interface) => {
                self.parse_annotation_type_declaration()
            }
            _ if self.static_initializer_ahead() => self.parse_static_initializer(),
            _ if self.type_declaration_ahead() => self.parse_type_declaration(),
            _ if self.record_ahead() => self.parse_record_declaration(),
            _ if self.constructor_ahead() => self.parse_constructor(),
            _ if self.method_ahead() => self.parse_method(),
            _ => self.parse_property(NodeKind::Property),
        }
    }

    /// `[mods] type declarator {, declarator} ;` as a member
    fn parse_property(&mut self, kind: NodeKind) -> Result<Node, ParseError> {
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
        Ok(Node::inner(kind, children, at))
    }

    // Methods and constructors

    pub(crate) fn static_initializer_ahead(&self) -> bool {
        self.check(Token::Static) && self.check_next(Token::LBrace)
    }

    pub(crate) fn parse_static_initializer(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let children = vec![
            self.expect(Token::Static, "'static'")?,
            self.parse_block()?.with_role(Field::Body),
        ];
        Ok(Node::inner(NodeKind::StaticInitializer, children, at))
    }

    pub(crate) fn record_ahead(&mut self) -> bool {
        let save = self.current;
        let ok = self.skim_annotations() && {
            self.skim_modifiers();
            self.check(Token::Record) && self.check_next(Token::Identifier)
        };
        self.current = save;
        ok
    }

    /// `[mods] [type_params] Name ( ... ) [throws] {` is a constructor
    pub(crate) fn constructor_ahead(&mut self) -> bool {
        let save = self.current;
        let ok = self.skim_annotations() && {
            self.skim_modifiers();
            if self.check(Token::Lt) {
                match self.scan_type_arguments(self.current) {
                    Some(past) => self.current = past,
                    None => {
                        self.current = save;
                        return false;
                    }
                }
            }
            self.check(Token::Identifier)
                && self.check_next(Token::LParen)
                && match self.scan_matching_paren(self.current + 1) {
                    Some(close) => matches!(
                        self.token_at(close + 1),
                        Some(Token::LBrace) | Some(Token::Throws)
                    ),
                    None => false,
                }
        };
        self.current = save;
        ok
    }

    /// `[mods] [type_params] type name (` is a method header
    pub(crate) fn method_ahead(&mut self) -> bool {
        let save = self.current;
        let ok = self.skim_annotations() && {
            self.skim_modifiers();
            if self.check(Token::Lt) {
                match self.scan_type_arguments(self.current) {
                    Some(past) => self.current = past,
                    None => {
                        self.current = save;
                        return false;
                    }
                }
            }
            self.skim_type() && self.check(Token::Identifier) && self.check_next(Token::LParen)
        };
        self.current = save;
        ok
    }

    /// Method declaration with inlined header: modifiers, type parameters,
    /// return type, name, parameters, throws, then a block or `;`
    pub(crate) fn parse_method(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.parse_decorator_list()?, self.parse_modifier_list()];
        children.push(self.parse_type_parameters_optional()?);
        children.push(self.parse_unannotated_type()?.with_role(Field::Type));
        children.push(
            self.expect_identifier(NodeKind::Identifier)?
                .with_role(Field::Name),
        );
        children.push(self.parse_formal_parameters()?.with_role(Field::ParameterList));
        if self.check(Token::LBracket) {
            children.push(self.parse_dimensions()?.with_role(Field::Dimensions));
        } else {
            children.push(self.ph(Field::Dimensions));
        }
        children.push(self.parse_throws_optional()?);
        if self.check(Token::Semicolon) {
            children.push(self.bump());
        } else {
            children.push(self.parse_block()?.with_role(Field::Body));
        }
        Ok(Node::inner(NodeKind::Method, children, at))
    }

    pub(crate) fn parse_constructor(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.parse_decorator_list()?, self.parse_modifier_list()];
        children.push(self.parse_type_parameters_optional()?);
        children.push(
            self.expect_identifier(NodeKind::Identifier)?
                .with_role(Field::Name),
        );
        children.push(self.parse_formal_parameters()?.with_role(Field::ParameterList));
        children.push(self.parse_throws_optional()?);
        children.push(self.parse_constructor_body()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::Constructor, children, at))
    }

    /// Constructor body: an optional leading `this(...)`/`super(...)`
    /// delegation, then ordinary statements
    fn parse_constructor_body(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LBrace, "'{'")?];
        if (self.check(Token::This) || self.check(Token::Super)) && self.check_next(Token::LParen)
        {
            let eci_at = self.cursor_location();
            let eci = vec![
                self.bump(),
                self.parse_arguments()?.with_role(Field::ArgumentList),
                self.expect(Token::Semicolon, "';'")?,
            ];
            children.push(Node::inner(
                NodeKind::ExplicitConstructorInvocation,
                eci,
                eci_at,
            ));
        }
        let list_at = self.prev_end();
        let mut statements = Vec::new();
        while !self.check(Token::RBrace) && !self.is_at_end() {
            statements.push(self.statement_or_recover());
        }
        children.push(Node::list(Field::StatementList, statements, list_at));
        children.push(self.expect(Token::RBrace, "'}'")?);
        Ok(Node::inner(NodeKind::ConstructorBody, children, at))
    }

    /// `( [param {, param}] )` including receiver and spread parameters
    pub(crate) fn parse_formal_parameters(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LParen, "'('")?];
        if !self.check(Token::RParen) {
            children.push(self.parse_formal_parameter()?);
            while self.check(Token::Comma) {
                children.push(self.bump());
                children.push(self.parse_formal_parameter()?);
            }
        }
        children.push(self.expect(Token::RParen, "')'")?);
        Ok(Node::inner(NodeKind::FormalParameters, children, at))
    }

    fn parse_formal_parameter(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let decorators = self.parse_decorator_list()?;
        let modifiers = self.parse_modifier_list();
        let ty = self.parse_unannotated_type()?.with_role(Field::Type);

        if self.check(Token::Ellipsis) {
            let children = vec![
                decorators,
                modifiers,
                ty,
                self.bump(),
                self.expect_identifier(NodeKind::Identifier)?
                    .with_role(Field::SpreadParameterVariable),
            ];
            return Ok(Node::inner(NodeKind::SpreadParameter, children, at)
                .with_role(Field::Parameter));
        }
        if self.check(Token::This) {
            let children = vec![decorators, modifiers, ty, self.bump_as(NodeKind::This)];
            return Ok(Node::inner(NodeKind::ReceiverParameter, children, at)
                .with_role(Field::Parameter));
        }
        let mut children = vec![
            decorators,
            modifiers,
            ty,
            self.expect_identifier(NodeKind::Identifier)?
                .with_role(Field::Name),
        ];
        if self.check(Token::LBracket) {
            children.push(self.parse_dimensions()?.with_role(Field::Dimensions));
        } else {
            children.push(self.ph(Field::Dimensions));
        }
        Ok(Node::inner(NodeKind::FormalParameter, children, at).with_role(Field::Parameter))
    }

    fn parse_throws_optional(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::Throws) {
            let at = self.cursor_location();
            let mut children = vec![self.bump(), self.parse_type()?];
            while self.check(Token::Comma) {
                children.push(self.bump());
                children.push(self.parse_type()?);
            }
            Ok(Node::inner(NodeKind::Throws, children, at).with_role(Field::ThrowsOptional))
        } else {
            Ok(self.ph(Field::ThrowsOptional))
        }
    }

    // Interfaces

    fn parse_interface_declaration(
        &mut self,
        at: Location,
        decorators: Node,
        modifiers: Node,
    ) -> Result<Node, ParseError> {
        let mut children = vec![decorators, modifiers];
        children.push(self.expect(Token::Interface, "'interface'")?);
        children.push(
            self.expect_identifier(NodeKind::TypeIdentifier)?
                .with_role(Field::Name),
        );
        children.push(self.parse_type_parameters_optional()?);

        if self.check(Token::Extends) {
            let ext_at = self.cursor_location();
            let mut ext = vec![self.bump(), self.parse_type()?];
            while self.check(Token::Comma) {
                ext.push(self.bump());
                ext.push(self.parse_type()?);
            }
            children.push(
                Node::inner(NodeKind::TypeBound, ext, ext_at).with_role(Field::ExtendsListOptional),
            );
        } else {
            children.push(self.ph(Field::ExtendsListOptional));
        }
        children.push(self.parse_interface_body()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::Interface, children, at))
    }

    fn parse_interface_body(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let open = self.expect(Token::LBrace, "'{'")?;
        let list_at = self.prev_end();
        let mut members = Vec::new();
        while !self.check(Token::RBrace) && !self.is_at_end() {
            let mark = self.current;
            match self.parse_interface_member() {
                Ok(member) => members.push(member),
                Err(e) => members.push(self.recover_member(mark, e)),
            }
        }
        let children = vec![
            open,
            Node::list(Field::InterfaceMemberList, members, list_at),
            self.expect(Token::RBrace, "'}'")?,
        ];
        Ok(Node::inner(NodeKind::InterfaceBody, children, at))
    }

    fn parse_interface_member(&mut self) -> Result<Node, ParseError> {
        match self.token() {
            Some(Token::Semicolon) => {
                let at = self.cursor_location();
                Ok(Node::inner(NodeKind::EmptyStatement, vec![self.bump()], at))
            }
            Some(Token::At) if self.check_next(Token::Interface) => {
                self.parse_annotation_type_declaration()
            }
            _ if self.type_declaration_ahead() => self.parse_type_declaration(),
            _ if self.record_ahead() => self.parse_record_declaration(),
            _ if self.method_ahead() => self.parse_method(),
            _ => self.parse_property(NodeKind::ConstantDeclaration),
        }
    }

    // Enums

    fn parse_enum_declaration(
        &mut self,
        at: Location,
        decorators: Node,
        modifiers: Node,
    ) -> Result<Node, ParseError> {
        let mut children = vec![decorators, modifiers];
        children.push(self.expect(Token::Enum, "'enum'")?);
        children.push(
            self.expect_identifier(NodeKind::TypeIdentifier)?
                .with_role(Field::Name),
        );
        children.push(self.parse_implements_optional()?);
        children.push(self.parse_enum_body()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::Enum, children, at))
    }

    /// `{ constants [,] [; members] }`
    fn parse_enum_body(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let open = self.expect(Token::LBrace, "'{'")?;
        let mut children = vec![open];

        let list_at = self.prev_end();
        let mut constants = Vec::new();
        while self.check(Token::Identifier) || self.check(Token::At) {
            let mark = self.current;
            match self.parse_enum_constant() {
                Ok(constant) => constants.push(constant),
                Err(e) => constants.push(self.recover_member(mark, e)),
            }
            if self.check(Token::Comma) {
                constants.push(self.bump());
            } else {
                break;
            }
        }
        children.push(Node::list(Field::EnumMemberList, constants, list_at));

        if self.check(Token::Semicolon) {
            let decl_at = self.cursor_location();
            let mut decls = vec![self.bump()];
            while !self.check(Token::RBrace) && !self.is_at_end() {
                let mark = self.current;
                match self.parse_class_member() {
                    Ok(member) => decls.push(member),
                    Err(e) => decls.push(self.recover_member(mark, e)),
                }
            }
            children.push(Node::inner(NodeKind::EnumBodyDeclarations, decls, decl_at));
        }
        children.push(self.expect(Token::RBrace, "'}'")?);
        Ok(Node::inner(NodeKind::EnumBody, children, at))
    }

    /// `[annotations] NAME [(args)] [body]`
    fn parse_enum_constant(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.parse_decorator_list()?];
        children.push(
            self.expect_identifier(NodeKind::Identifier)?
                .with_role(Field::Name),
        );
        if self.check(Token::LParen) {
            children.push(self.parse_arguments()?.with_role(Field::ArgumentList));
        } else {
            children.push(self.ph(Field::ArgumentList));
        }
        if self.check(Token::LBrace) {
            children.push(self.parse_class_body()?.with_role(Field::Body));
        } else {
            children.push(self.ph(Field::Body));
        }
        Ok(Node::inner(NodeKind::EnumConstant, children, at))
    }

    // Records

    /// `[mods] record Name [type_params] (components) [implements] body`
    pub(crate) fn parse_record_declaration(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.parse_decorator_list()?, self.parse_modifier_list()];
        children.push(self.expect(Token::Record, "'record'")?);
        children.push(
            self.expect_identifier(NodeKind::TypeIdentifier)?
                .with_role(Field::Name),
        );
        children.push(self.parse_type_parameters_optional()?);
        children.push(self.parse_formal_parameters()?.with_role(Field::ParameterList));
        children.push(self.parse_implements_optional()?);
        children.push(self.parse_class_body()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::RecordDeclaration, children, at))
    }

    // Annotation types

    /// `[mods] @interface Name { elements }`
    pub(crate) fn parse_annotation_type_declaration(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.parse_decorator_list()?, self.parse_modifier_list()];
        children.push(self.expect(Token::At, "'@'")?);
        children.push(self.expect(Token::Interface, "'interface'")?);
        children.push(
            self.expect_identifier(NodeKind::TypeIdentifier)?
                .with_role(Field::Name),
        );
        children.push(self.parse_annotation_type_body()?.with_role(Field::Body));
        Ok(Node::inner(NodeKind::AnnotationTypeDeclaration, children, at))
    }

    fn parse_annotation_type_body(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::LBrace, "'{'")?];
        while !self.check(Token::RBrace) && !self.is_at_end() {
            let mark = self.current;
            match self.parse_annotation_type_member() {
                Ok(member) => children.push(member),
                Err(e) => children.push(self.recover_member(mark, e)),
            }
        }
        children.push(self.expect(Token::RBrace, "'}'")?);
        Ok(Node::inner(NodeKind::AnnotationTypeBody, children, at))
    }

    /// `[mods] type name ( ) [default value] ;`, or a nested declaration
    /// or constant
    fn parse_annotation_type_member(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::At) && self.check_next(Token::Interface) {
            return self.parse_annotation_type_declaration();
        }
        if self.type_declaration_ahead() {
            return self.parse_type_declaration();
        }
        if self.method_ahead() {
            let at = self.cursor_location();
            let mut children = vec![self.parse_decorator_list()?, self.parse_modifier_list()];
            children.push(self.parse_unannotated_type()?.with_role(Field::Type));
            children.push(
                self.expect_identifier(NodeKind::Identifier)?
                    .with_role(Field::Name),
            );
            children.push(self.expect(Token::LParen, "'('")?);
            children.push(self.expect(Token::RParen, "')'")?);
            if self.check(Token::Default) {
                children.push(self.bump());
                children.push(self.parse_element_value()?.with_role(Field::Value));
            }
            children.push(self.expect(Token::Semicolon, "';'")?);
            return Ok(Node::inner(
                NodeKind::AnnotationTypeElementDeclaration,
                children,
                at,
            ));
        }
        self.parse_property(NodeKind::ConstantDeclaration)
    }
}
