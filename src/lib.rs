//! jcst: a lossless concrete syntax tree parser for Java-family source.
//!
//! The parser keeps every byte of the input: comments and whitespace ride
//! along as trivia, absent optional constructs materialize as placeholder
//! nodes, and repeated constructs always sit inside list nodes, so tree
//! consumers see one uniform shape per construct and can reconstruct the
//! original text exactly.
//!
//! ```
//! let tree = jcst::parse("class A { int x = 1; }").unwrap();
//! assert!(!tree.has_errors());
//! assert_eq!(tree.text(), "class A { int x = 1; }");
//! ```

pub mod cst;
pub mod error;
pub mod parser;

pub use cst::{Field, Node, NodeKind, Tree};
pub use error::{Error, Result};
pub use parser::{parse, ParseError};
