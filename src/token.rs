use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    ObjectStart,
    ObjectEnd,
    ListStart,
    ListEnd,
    Colon,
    Comma,

    String,
    Number,
    Bool,
    Null,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::ObjectStart => write!(f, "left brace"),
            TokenKind::ObjectEnd => write!(f, "right brace"),
            TokenKind::ListStart => write!(f, "left bracket"),
            TokenKind::ListEnd => write!(f, "right bracket"),
            TokenKind::Colon => write!(f, "colon"),
            TokenKind::Comma => write!(f, "comma"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Bool => write!(f, "bool"),
            TokenKind::Null => write!(f, "null"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::String | TokenKind::Number | TokenKind::Bool => {
                write!(f, "{}({})", self.kind, self.literal)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
