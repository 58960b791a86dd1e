//! Lexing and parsing for Java-family source.
//!
//! The pipeline is a single pass: [`Lexer`] turns the buffer into
//! significant tokens carrying their leading trivia, and [`Parser`] builds
//! a concrete syntax tree that reproduces the input text exactly.

pub mod conflicts;
pub mod declarations;
pub mod error;
pub mod expressions;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod span;
pub mod statements;
pub mod types;

pub use conflicts::{ConflictSet, Mechanism, CONFLICTS};
pub use error::ParseError;
pub use lexer::{Lexer, LexicalToken, Token, TokenStream, Trivia, TriviaKind};
pub use parser::{parse, Parser};
pub use span::{HasSpan, Location, Span};
