//! Concrete syntax tree: node kinds, named fields, placeholder nodes,
//! supertype classification, and text reconstruction.

pub mod node;
pub mod printer;

pub use node::{Field, Node, NodeKind, Tree};
pub use printer::{pretty, to_sexp};
