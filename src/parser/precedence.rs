//! Named precedence levels and associativity for every operator form.
//!
//! Levels follow the standard Java operator table, low to high; the
//! expression engine climbs this table, so a single integer per operator
//! replaces one recursive function per level.

use super::lexer::Token;

pub const ASSIGN: u8 = 1;
/// Tie-break: a `switch` in expression-valid position is always the
/// expression reading, never the statement one.
pub const SWITCH_EXP: u8 = 1;
pub const DECL: u8 = 2;
pub const ELEMENT_VAL: u8 = 2;
pub const TERNARY: u8 = 3;
pub const OR: u8 = 4;
pub const AND: u8 = 5;
pub const BIT_OR: u8 = 6;
pub const BIT_XOR: u8 = 7;
pub const BIT_AND: u8 = 8;
pub const EQUALITY: u8 = 9;
pub const GENERIC: u8 = 10;
pub const REL: u8 = 10;
pub const SHIFT: u8 = 11;
pub const ADD: u8 = 12;
pub const MULT: u8 = 13;
pub const CAST: u8 = 14;
pub const OBJ_INST: u8 = 14;
pub const UNARY: u8 = 15;
pub const ARRAY: u8 = 16;
pub const OBJ_ACCESS: u8 = 16;
pub const PARENS: u8 = 16;

/// The loosest level an expression parse starts from
pub const LOWEST: u8 = ASSIGN;

/// Associativity of a precedence level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
    None,
    /// Compared only between completed derivations of equal length
    /// (dangling-else, type-vs-expression), never ahead of time.
    Dynamic,
}

/// One named row of the precedence table
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub level: u8,
    pub assoc: Assoc,
}

/// The full table, one entry per named level
pub const TABLE: &[Entry] = &[
    Entry { name: "assignment", level: ASSIGN, assoc: Assoc::Right },
    Entry { name: "switch_expression", level: SWITCH_EXP, assoc: Assoc::None },
    Entry { name: "declaration", level: DECL, assoc: Assoc::None },
    Entry { name: "element_value", level: ELEMENT_VAL, assoc: Assoc::None },
    Entry { name: "ternary", level: TERNARY, assoc: Assoc::Right },
    Entry { name: "logical_or", level: OR, assoc: Assoc::Left },
    Entry { name: "logical_and", level: AND, assoc: Assoc::Left },
    Entry { name: "bitwise_or", level: BIT_OR, assoc: Assoc::Left },
    Entry { name: "bitwise_xor", level: BIT_XOR, assoc: Assoc::Left },
    Entry { name: "bitwise_and", level: BIT_AND, assoc: Assoc::Left },
    Entry { name: "equality", level: EQUALITY, assoc: Assoc::Left },
    Entry { name: "generic", level: GENERIC, assoc: Assoc::Dynamic },
    Entry { name: "relational", level: REL, assoc: Assoc::Left },
    Entry { name: "shift", level: SHIFT, assoc: Assoc::Left },
    Entry { name: "additive", level: ADD, assoc: Assoc::Left },
    Entry { name: "multiplicative", level: MULT, assoc: Assoc::Left },
    Entry { name: "cast", level: CAST, assoc: Assoc::None },
    Entry { name: "object_instantiation", level: OBJ_INST, assoc: Assoc::None },
    Entry { name: "unary", level: UNARY, assoc: Assoc::Left },
    Entry { name: "array", level: ARRAY, assoc: Assoc::Left },
    Entry { name: "object_access", level: OBJ_ACCESS, assoc: Assoc::Left },
    Entry { name: "parens", level: PARENS, assoc: Assoc::None },
];

/// Binary operator lookup: level and associativity, or None when the
/// token is not a binary infix operator.
///
/// `instanceof` is deliberately absent: it sits at REL but takes a type
/// on the right, so the engine special-cases it.
pub fn binary_operator(token: Token) -> Option<(u8, Assoc)> {
    let level = match token {
        Token::PipePipe => OR,
        Token::AndAnd => AND,
        Token::Pipe => BIT_OR,
        Token::Caret => BIT_XOR,
        Token::Amp => BIT_AND,
        Token::Eq | Token::Ne => EQUALITY,
        Token::Lt | Token::Le | Token::Gt | Token::Ge => REL,
        Token::LShift | Token::RShift | Token::URShift => SHIFT,
        Token::Plus | Token::Minus => ADD,
        Token::Star | Token::Slash | Token::Percent => MULT,
        _ => return None,
    };
    Some((level, Assoc::Left))
}
