use crate::token::TokenKind;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum LexError {
    #[error("Found end of input, until string starting at #{offset} not closed")]
    UnterminatedString { offset: usize },
    #[error("Unrecognized token `{0}`")]
    UnrecognizedToken(String),
    #[error("Malformed number `{0}`, two decimal points")]
    TwoDecimalPoints(String),
    #[error("Malformed number `{0}`")]
    InvalidNumber(String),
}

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("No token was given")]
    EmptyDocument,
    #[error("Expect object at token #{index}, but {found} is given")]
    ExpectedObject { index: usize, found: TokenKind },
    #[error("Found end of input, until object not closed")]
    UnterminatedObject,
    #[error("Found end of input, until list not closed")]
    UnterminatedList,
    #[error("Key must be a string, but {found} is given at token #{index}")]
    KeyNotString { index: usize, found: TokenKind },
    #[error("Expect colon at token #{index}, but {found} is given")]
    ExpectedColon { index: usize, found: TokenKind },
    #[error("Expect value at token #{index}, but {found} is given")]
    ExpectedValue { index: usize, found: TokenKind },
    #[error("Unexpected {found} at token #{index}")]
    UnexpectedToken { index: usize, found: TokenKind },
    #[error("Trailing token #{index} after root object")]
    TrailingTokens { index: usize },
}

#[derive(Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("Object child is not a member")]
    NotAMember,
    #[error("Key must be a string, but `{0}` is given")]
    KeyNotString(String),
    #[error("Member is only allowed inside an object")]
    MisplacedMember,
    #[error("{0} token has no value")]
    NonValueToken(TokenKind),
    #[error("Number `{0}` can not be represented")]
    InvalidNumber(String),
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("Nesting depth exceeds limit({limit})")]
    StackDepthExceeded { limit: usize },
    #[error("Input length({len}) exceeds limit({limit})")]
    InputTooLarge { len: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
