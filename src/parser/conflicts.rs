//! Ambiguity resolution: declared conflict sets and the lookahead oracles
//! that resolve them.
//!
//! Java's grammar has substrings that legitimately begin more than one
//! rule. Each such group is declared below together with the mechanism
//! that decides it; the oracles in this module are the implementation of
//! those mechanisms. Oracles never build nodes and never move the cursor
//! permanently: speculation saves the cursor, skims tokens, and restores.

use super::lexer::Token;
use super::parser::Parser;

/// How a conflict set is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    /// A fixed tie-break applied whenever both rules could start here
    StaticPrecedence,
    /// Both derivations stay alive until right-context decides
    DeclaredConflict,
    /// Compared only between completed derivations of equal length
    DynamicPrecedence,
}

/// A group of rule names known to share a prefix
#[derive(Debug, Clone, Copy)]
pub struct ConflictSet {
    pub rules: &'static [&'static str],
    pub mechanism: Mechanism,
}

/// Every ambiguity the grammar resolves beyond plain context-free parsing
pub const CONFLICTS: &[ConflictSet] = &[
    ConflictSet {
        rules: &["inferred_parameters", "primary_expression", "unannotated_type"],
        mechanism: Mechanism::DeclaredConflict,
    },
    ConflictSet {
        rules: &["lambda_parameter_list", "primary_expression", "unannotated_type"],
        mechanism: Mechanism::DeclaredConflict,
    },
    ConflictSet {
        rules: &["lambda", "primary_expression"],
        mechanism: Mechanism::DeclaredConflict,
    },
    ConflictSet {
        rules: &["inferred_parameters", "formal_parameters"],
        mechanism: Mechanism::DeclaredConflict,
    },
    ConflictSet {
        rules: &["unannotated_type", "primary_expression"],
        mechanism: Mechanism::DynamicPrecedence,
    },
    ConflictSet {
        rules: &["unannotated_type", "primary_expression", "scoped_type_identifier"],
        mechanism: Mechanism::DynamicPrecedence,
    },
    ConflictSet {
        rules: &["unannotated_type", "scoped_type_identifier"],
        mechanism: Mechanism::DynamicPrecedence,
    },
    ConflictSet {
        rules: &["unannotated_type", "generic_type"],
        mechanism: Mechanism::DynamicPrecedence,
    },
    ConflictSet {
        rules: &["generic_type", "primary_expression"],
        mechanism: Mechanism::StaticPrecedence,
    },
    ConflictSet {
        rules: &["switch_expression", "statement"],
        mechanism: Mechanism::StaticPrecedence,
    },
    ConflictSet {
        rules: &["if_clause", "else_if_clause"],
        mechanism: Mechanism::DynamicPrecedence,
    },
    ConflictSet {
        rules: &["try", "try_with_resources_statement"],
        mechanism: Mechanism::DeclaredConflict,
    },
    ConflictSet {
        rules: &["call_identifier", "constructor_declarator"],
        mechanism: Mechanism::DeclaredConflict,
    },
    ConflictSet {
        rules: &["identifier", "module_declaration"],
        mechanism: Mechanism::DeclaredConflict,
    },
];

impl Parser {
    /// Current token is an identifier spelling the given contextual word
    pub(crate) fn check_contextual(&self, word: &str) -> bool {
        self.check(Token::Identifier) && self.peek_lexeme() == Some(word)
    }

    fn token_is_contextual(&self, i: usize, word: &str) -> bool {
        self.token_at(i) == Some(Token::Identifier) && self.lexeme_at(i) == Some(word)
    }

    /// Lambda oracle: an identifier or a balanced `(...)` group followed
    /// by `->` starts a lambda, not an expression or cast.
    pub(crate) fn lambda_ahead(&self) -> bool {
        match self.token() {
            Some(Token::Identifier) => self.token_at(self.current + 1) == Some(Token::Arrow),
            Some(Token::LParen) => match self.scan_matching_paren(self.current) {
                Some(close) => self.token_at(close + 1) == Some(Token::Arrow),
                None => false,
            },
            _ => false,
        }
    }

    /// Index of the `)` matching the `(` at `open`, accounting for nesting
    pub(crate) fn scan_matching_paren(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut i = open;
        while let Some(token) = self.token_at(i) {
            match token {
                Token::LParen => depth += 1,
                Token::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// Generic-vs-relational oracle: from a `<` at `open`, scan a bounded
    /// right context admitting only type-argument tokens. `>>` and `>>>`
    /// close two and three levels at once; depth may go negative when the
    /// scan starts inside an enclosing argument list, in which case the
    /// surplus closers belong to the outer lists and are peeled off one
    /// at a time by token splitting.
    pub(crate) fn scan_type_arguments(&self, open: usize) -> Option<usize> {
        if self.token_at(open) != Some(Token::Lt) {
            return None;
        }
        let mut depth: i32 = 1;
        let mut i = open + 1;
        while let Some(token) = self.token_at(i) {
            match token {
                Token::Lt => depth += 1,
                Token::Gt => depth -= 1,
                Token::RShift => depth -= 2,
                Token::URShift => depth -= 3,
                Token::Identifier
                | Token::Dot
                | Token::Comma
                | Token::Question
                | Token::Extends
                | Token::Super
                | Token::Amp
                | Token::At
                | Token::LBracket
                | Token::RBracket => {}
                t if t.is_primitive_type() => {}
                _ => return None,
            }
            if depth <= 0 {
                return Some(i + 1);
            }
            i += 1;
        }
        None
    }

    /// Cast-vs-parenthesized oracle: `(` then one or more `&`-joined
    /// types then `)` is a cast only when a valid unary operand follows.
    /// After a reference-type list a leading `+`/`-`/`++`/`--` keeps the
    /// parenthesized reading (binary/update operator); after a primitive
    /// it is the cast's operand.
    pub(crate) fn cast_ahead(&mut self) -> bool {
        if !self.check(Token::LParen) {
            return false;
        }
        let save = self.current;
        self.current += 1;
        let mut primitive = self.token().map(|t| t.is_primitive_type()).unwrap_or(false);
        let mut ok = self.skim_annotations() && self.skim_type();
        while ok && self.check(Token::Amp) {
            self.current += 1;
            primitive = false;
            ok = self.skim_annotations() && self.skim_type();
        }
        ok = ok && self.check(Token::RParen);
        let follow = if ok { self.token_at(self.current + 1) } else { None };
        self.current = save;

        let Some(follow) = follow else { return false };
        match follow {
            Token::Plus | Token::Minus | Token::Inc | Token::Dec => primitive,
            Token::Identifier
            | Token::LParen
            | Token::Bang
            | Token::Tilde
            | Token::New
            | Token::This
            | Token::Super
            | Token::Switch => true,
            t => t.is_literal(),
        }
    }

    /// Declaration-vs-expression oracle at statement start: annotations,
    /// modifiers, a type, and a declarator id followed by `=`/`,`/`;`/`[`
    /// commit to a local variable declaration.
    pub(crate) fn local_variable_ahead(&mut self) -> bool {
        let save = self.current;
        let ok = self.skim_annotations()
            && {
                self.skim_modifiers();
                self.skim_type()
            }
            && self.check(Token::Identifier)
            && {
                self.current += 1;
                while self.check(Token::LBracket) && self.token_at(self.current + 1) == Some(Token::RBracket) {
                    self.current += 2;
                }
                matches!(
                    self.token(),
                    Some(Token::Assign) | Some(Token::Comma) | Some(Token::Semicolon)
                )
            };
        self.current = save;
        ok
    }

    /// Contextual `open`/`module` reinterpretation: only `[open] module
    /// Name ... {` is a module declaration; elsewhere both words are
    /// plain identifiers.
    pub(crate) fn module_declaration_ahead(&self) -> bool {
        let mut i = self.current;
        if self.token_is_contextual(i, "open") {
            i += 1;
        }
        if !self.token_is_contextual(i, "module") {
            return false;
        }
        i += 1;
        if self.token_at(i) != Some(Token::Identifier) {
            return false;
        }
        i += 1;
        while self.token_at(i) == Some(Token::Dot) && self.token_at(i + 1) == Some(Token::Identifier) {
            i += 2;
        }
        self.token_at(i) == Some(Token::LBrace)
    }

    /// Type-led-expression oracle: a speculative type parse is committed
    /// only when `.class` or `::` follows the type.
    pub(crate) fn type_led_expression_ahead(&mut self) -> Option<Token> {
        let save = self.current;
        let led = self.skim_type().then(|| match self.token() {
            Some(Token::Dot) if self.token_at(self.current + 1) == Some(Token::Class) => Some(Token::Class),
            Some(Token::DoubleColon) => Some(Token::DoubleColon),
            _ => None,
        });
        self.current = save;
        led.flatten()
    }

    // Skimming: cursor-only recognizers used by the oracles above.

    /// Skim annotations (`@Name` or `@Name(...)`), not `@interface`
    pub(crate) fn skim_annotations(&mut self) -> bool {
        while self.check(Token::At) && self.token_at(self.current + 1) != Some(Token::Interface) {
            self.current += 1;
            if !self.check(Token::Identifier) {
                return false;
            }
            self.current += 1;
            while self.check(Token::Dot) && self.token_at(self.current + 1) == Some(Token::Identifier) {
                self.current += 2;
            }
            if self.check(Token::LParen) {
                match self.scan_matching_paren(self.current) {
                    Some(close) => self.current = close + 1,
                    None => return false,
                }
            }
        }
        true
    }

    /// Skim any run of declaration modifiers
    pub(crate) fn skim_modifiers(&mut self) {
        while self.token().map(|t| t.is_modifier()).unwrap_or(false) {
            self.current += 1;
        }
    }

    /// Skim one type: primitive or (possibly scoped, possibly generic)
    /// named type, then any `[]` dimensions
    pub(crate) fn skim_type(&mut self) -> bool {
        match self.token() {
            Some(t) if t.is_primitive_type() => {
                self.current += 1;
            }
            Some(Token::Identifier) => {
                self.current += 1;
                loop {
                    if self.check(Token::Lt) {
                        match self.scan_type_arguments(self.current) {
                            Some(past) => self.current = past,
                            None => break,
                        }
                    } else if self.check(Token::Dot)
                        && self.token_at(self.current + 1) == Some(Token::Identifier)
                    {
                        self.current += 2;
                    } else {
                        break;
                    }
                }
            }
            _ => return false,
        }
        while self.check(Token::LBracket) && self.token_at(self.current + 1) == Some(Token::RBracket) {
            self.current += 2;
        }
        true
    }
}
