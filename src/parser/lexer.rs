use logos::Logos;

use super::span::{Location, Span};

/// Token types for Java-family source
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // Keywords
    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("static")]
    Static,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("abstract")]
    Abstract,
    #[token("final")]
    Final,
    #[token("native")]
    Native,
    #[token("synchronized")]
    Synchronized,
    #[token("transient")]
    Transient,
    #[token("volatile")]
    Volatile,
    #[token("strictfp")]
    Strictfp,
    #[token("default")]
    Default,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("enum")]
    Enum,
    #[token("record")]
    Record,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("new")]
    New,
    #[token("this")]
    This,
    #[token("super")]
    Super,
    #[token("instanceof")]
    InstanceOf,
    #[token("void")]
    Void,
    #[token("boolean")]
    Boolean,
    #[token("byte")]
    Byte,
    #[token("short")]
    Short,
    #[token("int")]
    Int,
    #[token("long")]
    Long,
    #[token("char")]
    Char,
    #[token("float")]
    Float,
    #[token("double")]
    Double,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("assert")]
    Assert,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("return")]
    Return,
    #[token("yield")]
    Yield,
    #[token("throw")]
    Throw,
    #[token("throws")]
    Throws,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("finally")]
    Finally,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // Operators
    #[token("=")]
    Assign,
    #[token("+=")]
    AddAssign,
    #[token("-=")]
    SubAssign,
    #[token("*=")]
    MulAssign,
    #[token("/=")]
    DivAssign,
    #[token("%=")]
    ModAssign,
    #[token("&=")]
    AndAssign,
    #[token("|=")]
    OrAssign,
    #[token("^=")]
    XorAssign,
    #[token("<<=")]
    LShiftAssign,
    #[token(">>=")]
    RShiftAssign,
    #[token(">>>=")]
    URShiftAssign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("<<")]
    LShift,
    #[token(">>")]
    RShift,
    #[token(">>>")]
    URShift,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    PipePipe,
    #[token("==")]
    Eq,
    #[token("!=")]
    Ne,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token("->")]
    Arrow,

    // Separators
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("...")]
    Ellipsis,

    // Literals. Digit runs may be `_`-grouped; all integer forms take an
    // optional l/L suffix.
    #[regex(r"[0-9]+(_+[0-9]+)*[lL]?", priority = 3)]
    DecimalInteger,
    #[regex(r"0[xX][0-9a-fA-F]+(_[0-9a-fA-F]+)*[lL]?", priority = 4)]
    HexInteger,
    #[regex(r"0[oO][0-7]+(_[0-7]+)*[lL]?", priority = 4)]
    OctalInteger,
    #[regex(r"0[bB][01]+(_[01]+)*[lL]?", priority = 4)]
    BinaryInteger,
    // The four decimal floating point shapes: digits '.' [digits] [exp] [sfx],
    // '.' digits [exp] [sfx], digits exp [sfx], digits [exp] sfx.
    #[regex(r"[0-9]+(_+[0-9]+)*\.([0-9]+(_+[0-9]+)*)?([eE][+-]?[0-9]+(_+[0-9]+)*)?[fFdD]?", priority = 5)]
    #[regex(r"\.[0-9]+(_+[0-9]+)*([eE][+-]?[0-9]+(_+[0-9]+)*)?[fFdD]?", priority = 5)]
    #[regex(r"[0-9]+(_+[0-9]+)*[eE][+-]?[0-9]+(_+[0-9]+)*[fFdD]?", priority = 5)]
    #[regex(r"[0-9]+(_+[0-9]+)*[fFdD]", priority = 5)]
    DecimalFloat,
    // Hex float needs a binary exponent (p/P) unless the mantissa ends in a
    // bare trailing dot; an 'e' exponent would be ambiguous with hex digits.
    #[regex(r"0[xX][0-9a-fA-F]+(_[0-9a-fA-F]+)*\.?[pP][+-]?[0-9]+(_+[0-9]+)*[fFdD]?", priority = 6)]
    #[regex(r"0[xX]([0-9a-fA-F]+(_[0-9a-fA-F]+)*)?\.[0-9a-fA-F]+(_[0-9a-fA-F]+)*([pP][+-]?[0-9]+(_+[0-9]+)*[fFdD]?)?", priority = 6)]
    #[regex(r"0[xX][0-9a-fA-F]+(_[0-9a-fA-F]+)*\.", priority = 6)]
    HexFloat,
    #[regex(r#""([^"\\\n]|\\(.|\n))*""#)]
    StringLiteral,
    #[regex(r"'([^'\\\n]|\\.|\\\n)+'")]
    CharLiteral,

    // Identifiers. `open` and `module` (and the module-directive words) are
    // contextually reserved: they lex as identifiers and the parser decides.
    #[regex(r"[\p{L}_$][\p{L}\p{Nd}_$]*")]
    Identifier,

    // Extras: retained as trivia, never dropped
    #[regex(r"//[^\n]*")]
    LineComment,
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 2)]
    BlockComment,
    #[regex(r"[ \t\r\n\u{000C}]+", priority = 2)]
    Whitespace,
    #[token("\u{FEFF}")]
    Bom,

    // Produced only for input no lexical rule matches
    Unrecognized,
}

impl Token {
    /// Check if this token is a declaration modifier
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Token::Public
                | Token::Protected
                | Token::Private
                | Token::Abstract
                | Token::Static
                | Token::Final
                | Token::Strictfp
                | Token::Default
                | Token::Synchronized
                | Token::Native
                | Token::Transient
                | Token::Volatile
        )
    }

    /// Check if this token is a primitive type keyword
    pub fn is_primitive_type(&self) -> bool {
        matches!(
            self,
            Token::Void
                | Token::Boolean
                | Token::Byte
                | Token::Short
                | Token::Int
                | Token::Long
                | Token::Char
                | Token::Float
                | Token::Double
        )
    }

    /// Check if this token is a literal
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::DecimalInteger
                | Token::HexInteger
                | Token::OctalInteger
                | Token::BinaryInteger
                | Token::DecimalFloat
                | Token::HexFloat
                | Token::StringLiteral
                | Token::CharLiteral
                | Token::True
                | Token::False
                | Token::Null
        )
    }

    /// Check if this token is a compound or plain assignment operator
    pub fn is_assignment_operator(&self) -> bool {
        matches!(
            self,
            Token::Assign
                | Token::AddAssign
                | Token::SubAssign
                | Token::MulAssign
                | Token::DivAssign
                | Token::ModAssign
                | Token::AndAssign
                | Token::OrAssign
                | Token::XorAssign
                | Token::LShiftAssign
                | Token::RShiftAssign
                | Token::URShiftAssign
        )
    }

    /// Check if this token is lexical trivia
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::LineComment | Token::BlockComment | Token::Whitespace | Token::Bom
        )
    }
}

/// Kind of an out-of-band trivia item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaKind {
    LineComment,
    BlockComment,
    Whitespace,
}

/// A comment or whitespace run, attached to the nearest following token
#[derive(Debug, Clone, PartialEq)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: String,
    pub span: Span,
}

/// A significant token with location information and leading trivia
#[derive(Debug, Clone)]
pub struct LexicalToken {
    pub token: Token,
    pub lexeme: String,
    pub span: Span,
    pub leading: Vec<Trivia>,
}

impl LexicalToken {
    pub fn new(token: Token, lexeme: String, span: Span) -> Self {
        Self {
            token,
            lexeme,
            span,
            leading: Vec::new(),
        }
    }

    /// Get the lexeme (actual text)
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Check if this token matches the given token type
    pub fn is(&self, token: Token) -> bool {
        self.token == token
    }
}

/// The result of scanning a whole buffer: significant tokens with their
/// leading trivia, plus whatever trivia trails the last token.
#[derive(Debug, Clone)]
pub struct TokenStream {
    pub tokens: Vec<LexicalToken>,
    pub trailing: Vec<Trivia>,
    pub end: Location,
}

/// Lexer for Java-family source
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
    location: Location,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: Token::lexer(source),
            location: Location::start(),
        }
    }

    /// Scan the whole buffer left to right, longest match first.
    ///
    /// Extras (comments, whitespace) never become tokens of their own; they
    /// accumulate as leading trivia on the next significant token so the
    /// original text can be reconstructed from the stream.
    pub fn tokenize(mut self) -> TokenStream {
        let mut tokens: Vec<LexicalToken> = Vec::new();
        let mut pending: Vec<Trivia> = Vec::new();

        while let Some(result) = self.inner.next() {
            let (token, slice) = match result {
                Ok(token) => (token, self.inner.slice().to_string()),
                Err(()) => {
                    // Take exactly what logos consumed, or one char if it
                    // stalled, so the scan always makes progress.
                    let mut slice = self.inner.slice().to_string();
                    if slice.is_empty() {
                        if let Some(first) = self.inner.remainder().chars().next() {
                            slice.push(first);
                            self.inner.bump(first.len_utf8());
                        } else {
                            break;
                        }
                    }
                    (Token::Unrecognized, slice)
                }
            };

            let start = self.location;
            self.location.advance_str(&slice);
            let span = Span::new(start, self.location);

            match token {
                Token::LineComment | Token::BlockComment => {
                    let kind = if token == Token::LineComment {
                        TriviaKind::LineComment
                    } else {
                        TriviaKind::BlockComment
                    };
                    pending.push(Trivia { kind, text: slice, span });
                }
                Token::Whitespace | Token::Bom => {
                    pending.push(Trivia {
                        kind: TriviaKind::Whitespace,
                        text: slice,
                        span,
                    });
                }
                _ => {
                    let mut tok = LexicalToken::new(token, slice, span);
                    tok.leading = std::mem::take(&mut pending);
                    tokens.push(tok);
                }
            }
        }

        TokenStream {
            tokens,
            trailing: pending,
            end: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().tokens.iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_lexer_keywords() {
        let toks = kinds("public class Test extends Object implements Base");
        assert_eq!(
            toks,
            vec![
                Token::Public,
                Token::Class,
                Token::Identifier,
                Token::Extends,
                Token::Identifier,
                Token::Implements,
                Token::Identifier,
            ]
        );
    }

    #[test]
    fn test_lexer_contextual_keywords_are_identifiers() {
        // `open` and `module` are reserved only in module-declaration position
        assert_eq!(kinds("open module"), vec![Token::Identifier, Token::Identifier]);
    }

    #[test]
    fn test_lexer_integer_shapes() {
        assert_eq!(kinds("0x1A_2Bl"), vec![Token::HexInteger]);
        assert_eq!(kinds("0b1010"), vec![Token::BinaryInteger]);
        assert_eq!(kinds("0o777_7L"), vec![Token::OctalInteger]);
        assert_eq!(kinds("1_000_000L"), vec![Token::DecimalInteger]);
    }

    #[test]
    fn test_lexer_float_shapes() {
        assert_eq!(kinds("1_000.5e-3f"), vec![Token::DecimalFloat]);
        assert_eq!(kinds(".5d"), vec![Token::DecimalFloat]);
        assert_eq!(kinds("1e10"), vec![Token::DecimalFloat]);
        assert_eq!(kinds("1f"), vec![Token::DecimalFloat]);
        assert_eq!(kinds("0x1.8p3"), vec![Token::HexFloat]);
        // 'e' is a hex digit, so this must stay an integer
        assert_eq!(kinds("0x1e2"), vec![Token::HexInteger]);
    }

    #[test]
    fn test_lexer_comment_not_started_in_string() {
        let toks = kinds(r#""http://example.com""#);
        assert_eq!(toks, vec![Token::StringLiteral]);
    }

    #[test]
    fn test_lexer_trivia_attachment() {
        let stream = Lexer::new("// lead\nfoo /* mid */ bar ").tokenize();
        assert_eq!(stream.tokens.len(), 2);
        assert_eq!(stream.tokens[0].leading.len(), 2); // comment + newline
        assert_eq!(stream.tokens[0].leading[0].kind, TriviaKind::LineComment);
        assert_eq!(stream.tokens[1].leading.len(), 3); // space, block comment, space
        assert_eq!(stream.trailing.len(), 1);
    }

    #[test]
    fn test_lexer_longest_match() {
        assert_eq!(kinds(">>>="), vec![Token::URShiftAssign]);
        assert_eq!(kinds(">>>"), vec![Token::URShift]);
        assert_eq!(kinds("->"), vec![Token::Arrow]);
        assert_eq!(kinds("::"), vec![Token::DoubleColon]);
    }

    #[test]
    fn test_lexer_unrecognized_input() {
        let stream = Lexer::new("int x = #;").tokenize();
        let toks: Vec<Token> = stream.tokens.iter().map(|t| t.token).collect();
        assert!(toks.contains(&Token::Unrecognized));
        assert_eq!(*toks.last().expect("tokens"), Token::Semicolon);
    }
}
