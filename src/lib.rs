//! Parser for a relaxed JSON dialect where strings may use single or double
//! quotes. Input goes through three stages:
//!
//! 1. [`tokenize`] turns text into [`Token`]s,
//! 2. [`parse_tree`] builds a [`SyntaxNode`] tree rooted at one object,
//! 3. [`evaluate`] turns the tree into a [`Value`].
//!
//! [`parse_json_like`] runs all of them.
//!
//! ```
//! use quoted_json_parser::{parse_json_like, Value};
//!
//! let value = parse_json_like("{'name': \"rill\", 'sizes': [1, 2.5]}").unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("rill"));
//! assert_eq!(value.get("sizes"), Some(&quoted_json_parser::list![1i64, 2.5]));
//! ```

mod config;
mod error;
mod lexer;
mod parser;
mod syntax;
mod token;
mod value;

pub use config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN};
pub use error::{Error, EvalError, LexError, ParseError, Result};
pub use lexer::tokenize;
pub use parser::{parse, parse_tree, parse_with};
pub use syntax::{evaluate, evaluate_with, ListNode, MemberNode, ObjectNode, SyntaxNode};
pub use token::{Token, TokenKind};
pub use value::{Map, Value};

/// Parses `input` into a [`Value`] with the default [`Config`].
pub fn parse_json_like(input: &str) -> Result<Value> {
    parse_json_like_with(input, &Config::default())
}

/// Parses `input` into a [`Value`], rejecting input longer than
/// `config.max_input_len` bytes before tokenizing.
pub fn parse_json_like_with(input: &str, config: &Config) -> Result<Value> {
    if input.len() > config.max_input_len {
        return Err(Error::InputTooLarge {
            len: input.len(),
            limit: config.max_input_len,
        });
    }

    let tokens = tokenize(input)?;
    parse_with(&tokens, config)
}
