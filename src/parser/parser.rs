//! Parser core: token cursor, node construction helpers, error recovery,
//! and the top-level `program` rule.
//!
//! The grammar areas live in sibling modules (`expressions`, `statements`,
//! `declarations`, `types`); all of them are `impl Parser` blocks over the
//! state defined here.

use super::error::ParseError;
use super::lexer::{Lexer, LexicalToken, Token, TokenStream, Trivia};
use super::span::{Location, Span};
use crate::cst::node::{Field, Node, NodeKind, Tree};

/// Recursive-descent parser over a pre-scanned token stream
pub struct Parser {
    pub(crate) tokens: Vec<LexicalToken>,
    pub(crate) current: usize,
    pub(crate) errors: Vec<ParseError>,
    trailing: Vec<Trivia>,
    end: Location,
    // Tokens rewritten by split_angle, kept so recovery can undo them
    splits: Vec<(usize, LexicalToken)>,
}

/// Parse a source buffer into a concrete syntax tree.
///
/// Lexical and syntactic errors do not abort the parse: the failure point
/// is wrapped in an `Error` node and collected on the returned tree.
pub fn parse(source: &str) -> crate::error::Result<Tree> {
    let stream = Lexer::new(source).tokenize();
    let mut parser = Parser::new(stream);
    let root = parser.parse_program();
    Ok(Tree {
        root,
        trailing: parser.trailing,
        errors: parser.errors,
    })
}

impl Parser {
    pub fn new(stream: TokenStream) -> Self {
        Self {
            tokens: stream.tokens,
            current: 0,
            errors: Vec::new(),
            trailing: stream.trailing,
            end: stream.end,
            splits: Vec::new(),
        }
    }

    // Cursor primitives

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    pub(crate) fn token(&self) -> Option<Token> {
        self.token_at(self.current)
    }

    pub(crate) fn token_at(&self, i: usize) -> Option<Token> {
        self.tokens.get(i).map(|t| t.token)
    }

    pub(crate) fn lexeme_at(&self, i: usize) -> Option<&str> {
        self.tokens.get(i).map(|t| t.lexeme())
    }

    pub(crate) fn peek_lexeme(&self) -> Option<&str> {
        self.lexeme_at(self.current)
    }

    pub(crate) fn check(&self, token: Token) -> bool {
        self.token() == Some(token)
    }

    pub(crate) fn check_next(&self, token: Token) -> bool {
        self.token_at(self.current + 1) == Some(token)
    }

    /// Start of the current token, or end of input
    pub(crate) fn cursor_location(&self) -> Location {
        self.tokens
            .get(self.current)
            .map(|t| t.span.start)
            .unwrap_or(self.end)
    }

    /// End of the previous token, or start of input
    pub(crate) fn prev_end(&self) -> Location {
        if self.current == 0 {
            Location::start()
        } else {
            self.tokens
                .get(self.current - 1)
                .map(|t| t.span.end)
                .unwrap_or(self.end)
        }
    }

    pub(crate) fn advance(&mut self) -> LexicalToken {
        let tok = self.tokens[self.current].clone();
        self.current += 1;
        tok
    }

    // Node construction

    /// Consume the current token as an anonymous leaf
    pub(crate) fn bump(&mut self) -> Node {
        self.bump_as(NodeKind::Token)
    }

    /// Consume the current token as a named leaf of the given kind
    pub(crate) fn bump_as(&mut self, kind: NodeKind) -> Node {
        let tok = self.advance();
        Node::leaf(kind, tok.lexeme, tok.span, tok.leading)
    }

    /// Consume the expected token as an anonymous leaf, or error without
    /// consuming anything
    pub(crate) fn expect(&mut self, token: Token, expected: &str) -> Result<Node, ParseError> {
        if self.check(token) {
            Ok(self.bump())
        } else {
            Err(self.error_unexpected(expected))
        }
    }

    /// Consume an identifier as a leaf of the given kind (`Identifier`,
    /// or `TypeIdentifier` via the type alias)
    pub(crate) fn expect_identifier(&mut self, kind: NodeKind) -> Result<Node, ParseError> {
        if self.check(Token::Identifier) {
            Ok(self.bump_as(kind))
        } else {
            Err(self.error_unexpected("identifier"))
        }
    }

    /// Consume the current token if it matches
    pub(crate) fn eat(&mut self, token: Token) -> Option<Node> {
        if self.check(token) {
            Some(self.bump())
        } else {
            None
        }
    }

    pub(crate) fn error_unexpected(&self, expected: &str) -> ParseError {
        match self.tokens.get(self.current) {
            Some(tok) => ParseError::unexpected_token(
                expected,
                format!("{:?}", tok.token),
                tok.span.start,
            ),
            None => ParseError::unexpected_end_of_input(expected, self.end),
        }
    }

    pub(crate) fn record(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Placeholder for an absent optional construct, at the seam between
    /// the previous and current token
    pub(crate) fn ph(&self, role: Field) -> Node {
        Node::placeholder(role, self.prev_end())
    }

    /// Split a `>>`-family token so a type-argument list can close one
    /// angle bracket at a time. Returns the leading `>` leaf; the
    /// remainder stays at the cursor as a shorter token.
    pub(crate) fn split_angle(&mut self) -> Node {
        let tok = self.tokens[self.current].clone();
        let rest_token = match tok.token {
            Token::URShift => Token::RShift,
            Token::RShift => Token::Gt,
            Token::Ge => Token::Assign,
            Token::RShiftAssign => Token::Ge,
            Token::URShiftAssign => Token::RShiftAssign,
            other => {
                debug_assert!(false, "split_angle on {:?}", other);
                return self.bump();
            }
        };
        let mut mid = tok.span.start;
        mid.advance('>');
        let leaf = Node::leaf(
            NodeKind::Token,
            ">".to_string(),
            Span::new(tok.span.start, mid),
            tok.leading.clone(),
        );
        self.splits.push((self.current, tok.clone()));
        self.tokens[self.current] = LexicalToken::new(
            rest_token,
            tok.lexeme[1..].to_string(),
            Span::new(mid, tok.span.end),
        );
        leaf
    }

    /// Consume one closing `>` in type-argument context, splitting
    /// compound shift/compare tokens when needed
    pub(crate) fn expect_close_angle(&mut self) -> Result<Node, ParseError> {
        match self.token() {
            Some(Token::Gt) => Ok(self.bump()),
            Some(Token::RShift)
            | Some(Token::URShift)
            | Some(Token::Ge)
            | Some(Token::RShiftAssign)
            | Some(Token::URShiftAssign) => Ok(self.split_angle()),
            _ => Err(self.error_unexpected("'>'")),
        }
    }

    // Error recovery

    /// Swallow tokens into an `Error` node until a synchronization token.
    /// The cursor first rewinds to `start`, the index where the failed
    /// construct began, so every consumed token ends up in the error node
    /// and text reconstruction stays exact. A `;` boundary is consumed
    /// into the error node; `}` and statement keywords are left for the
    /// caller. At least one token is always consumed so recovery loops
    /// make progress.
    pub(crate) fn recover(&mut self, start: usize, sync: &[Token]) -> Node {
        self.current = start.min(self.current);
        // Any token split past the rewind point belonged to the failed
        // construct; put the originals back so the error node re-consumes
        // the full token text. Restoring in reverse leaves a twice-split
        // token at its unsplit form.
        while self.splits.last().map_or(false, |(i, _)| *i >= self.current) {
            if let Some((i, original)) = self.splits.pop() {
                self.tokens[i] = original;
            }
        }
        let at = self.cursor_location();
        let mut children = Vec::new();
        while let Some(token) = self.token() {
            if token == Token::Semicolon {
                children.push(self.bump());
                break;
            }
            if sync.contains(&token) && !children.is_empty() {
                break;
            }
            if token == Token::Unrecognized {
                let tok = &self.tokens[self.current];
                self.errors.push(ParseError::Lexical {
                    text: tok.lexeme.clone(),
                    location: tok.span.start,
                });
            }
            children.push(self.bump());
        }
        Node::inner(NodeKind::Error, children, at)
    }

    /// Recovery set for statement position
    pub(crate) fn recover_statement(&mut self, start: usize, error: ParseError) -> Node {
        self.record(error);
        self.recover(
            start,
            &[
                Token::RBrace,
                Token::LBrace,
                Token::If,
                Token::While,
                Token::For,
                Token::Do,
                Token::Switch,
                Token::Try,
                Token::Return,
                Token::Break,
                Token::Continue,
                Token::Throw,
                Token::Class,
                Token::Interface,
                Token::Enum,
            ],
        )
    }

    /// Recovery set for member position
    pub(crate) fn recover_member(&mut self, start: usize, error: ParseError) -> Node {
        self.record(error);
        self.recover(start, &[Token::RBrace, Token::Class, Token::Interface, Token::Enum])
    }

    /// Parse one statement, degrading to an `Error` node over the failed
    /// construct's tokens
    pub(crate) fn statement_or_recover(&mut self) -> Node {
        let start = self.current;
        match self.parse_statement() {
            Ok(stmt) => stmt,
            Err(e) => self.recover_statement(start, e),
        }
    }

    // Top level

    /// `program`: optional package, imports, type declarations, then
    /// trailing script-mode elements. Every slot is materialized.
    pub(crate) fn parse_program(&mut self) -> Node {
        let start = Location::start();
        let mut children = Vec::new();

        if self.package_ahead() {
            let mark = self.current;
            match self.parse_package() {
                Ok(node) => children.push(node.with_role(Field::PackageOptional)),
                Err(e) => {
                    children
                        .push(self.recover_statement(mark, e).with_role(Field::PackageOptional));
                }
            }
        } else {
            children.push(Node::placeholder(Field::PackageOptional, start));
        }

        let imports_at = self.prev_end();
        let mut imports = Vec::new();
        while self.check(Token::Import) {
            let mark = self.current;
            match self.parse_import() {
                Ok(node) => imports.push(node),
                Err(e) => imports.push(self.recover_statement(mark, e)),
            }
        }
        children.push(Node::list(Field::ImportList, imports, imports_at));

        let types_at = self.prev_end();
        let mut types = Vec::new();
        while self.type_declaration_ahead() {
            let mark = self.current;
            match self.parse_type_declaration() {
                Ok(node) => types.push(node),
                Err(e) => types.push(self.recover_member(mark, e)),
            }
        }
        children.push(Node::list(Field::TypeDeclarationList, types, types_at));

        let stmts_at = self.prev_end();
        let mut stmts = Vec::new();
        while !self.is_at_end() {
            stmts.push(self.parse_program_element());
        }
        children.push(Node::list(Field::StatementList, stmts, stmts_at));

        Node::inner(NodeKind::Program, children, start)
    }

    /// `[annotations] package` begins a package clause
    fn package_ahead(&mut self) -> bool {
        let save = self.current;
        let ok = self.skim_annotations() && self.check(Token::Package);
        self.current = save;
        ok
    }

    /// `[annotations] [modifiers] class|interface|enum` begins a type
    /// declaration
    pub(crate) fn type_declaration_ahead(&mut self) -> bool {
        let save = self.current;
        let ok = self.skim_annotations() && {
            self.skim_modifiers();
            matches!(
                self.token(),
                Some(Token::Class) | Some(Token::Interface) | Some(Token::Enum)
            )
        };
        self.current = save;
        ok
    }

    /// One trailing program element: statement, record, method, static
    /// initializer, or constructor (script-mode bodies)
    fn parse_program_element(&mut self) -> Node {
        let mark = self.current;
        let parsed = if self.type_declaration_ahead() {
            self.parse_type_declaration()
        } else if self.static_initializer_ahead() {
            self.parse_static_initializer()
        } else if self.record_ahead() {
            self.parse_record_declaration()
        } else if self.constructor_ahead() {
            self.parse_constructor()
        } else if self.method_ahead() {
            self.parse_method()
        } else {
            return self.statement_or_recover();
        };
        match parsed {
            Ok(node) => node,
            Err(e) => self.recover_member(mark, e),
        }
    }
}
